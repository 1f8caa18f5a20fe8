//! Procedural outline geometry.
//!
//! A cloud is built in three passes:
//!
//! 1. [`pill_points`] samples evenly spaced points around the stadium
//!    inscribed in the shape's box, each tagged with a stable seed.
//! 2. [`cloud_arc_points`] picks a bump spacing for the size class and
//!    nudges every sample by a wobble keyed on its own seed.
//! 3. [`cloud_arcs`] joins consecutive samples with outward-bulging arcs,
//!    which are rendered as a polygon ([`cloud_outline`]) or an SVG path
//!    ([`cloud_svg_path`], [`inky_cloud_svg_path`]).
//!
//! Everything here is a pure function of `(width, height, seed, size)`.
//! Non-positive sizes produce empty outlines rather than errors.

mod cloud;
mod path;
mod pill;

pub use cloud::{
    CloudArc, OUTLINE_POINTS_PER_ARC, arcs_through, bump_radius, cloud_arc, cloud_arc_points,
    cloud_arc_points_with, cloud_arcs, cloud_arcs_with, cloud_outline, cloud_outline_with,
    outline_of, points_on_arc, short_angle_dist,
};
pub use path::{
    arcs_svg_path, cloud_svg_path, cloud_svg_path_with, inky_cloud_svg_path,
    inky_cloud_svg_path_with,
};
pub use pill::{PillPoint, PillSection, pill_points, pill_sections, point_on_circle};
