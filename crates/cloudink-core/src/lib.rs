//! CloudInk Core Library
//!
//! Seeded, hand-drawn cloud outlines for a whiteboard: the geometry
//! generator, the cloud shape built on it, and SVG export.

pub mod export;
pub mod geometry;
pub mod params;
pub mod rng;
pub mod shapes;

pub use geometry::{
    CloudArc, PillPoint, PillSection, cloud_arc, cloud_arc_points, cloud_arcs, cloud_outline,
    cloud_svg_path, inky_cloud_svg_path, pill_points, points_on_arc,
};
pub use params::{CloudParams, ParamsError, ParamsResult};
pub use rng::{Generator, RandomSource, Xorshift, XorshiftRng, rng};
pub use shapes::{Cloud, DashStyle, SerializableColor, ShapeStyle, ShapeTrait, SizeStyle};
