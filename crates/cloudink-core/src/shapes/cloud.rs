//! Cloud geo shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, point_to_polygon_dist, points_bounds};
use crate::geometry::CloudArc;
use crate::params::CloudParams;
use kurbo::{Affine, Arc, BezPath, Point, Rect, Shape as KurboShape, SvgArc, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flattening tolerance when converting bumps to Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// A cloud drawn inside a `width` x `height` box.
///
/// The shape's id doubles as the jitter seed, so a cloud keeps its bumps
/// through moves, restyles and reloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub(crate) id: ShapeId,
    /// Top-left corner of the box.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in radians (around center).
    #[serde(default)]
    pub rotation: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Cloud {
    /// Create a new cloud.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self::with_id(Uuid::new_v4(), position, width, height)
    }

    /// Create a cloud with a specific ID, e.g. when restoring a document.
    pub fn with_id(id: ShapeId, position: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            position,
            width,
            height,
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Create a cloud filling `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.origin(), rect.width(), rect.height())
    }

    /// Seed string for the outline jitter.
    pub fn seed(&self) -> String {
        self.id.to_string()
    }

    /// The generator inputs for this cloud, in local coordinates.
    pub fn params(&self) -> CloudParams {
        CloudParams {
            width: self.width,
            height: self.height,
            seed: self.seed(),
            size: self.style.size,
            inky: self.style.dash.is_inky(),
        }
    }

    /// The box the cloud is drawn in, before rotation.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }

    /// Local (box-relative) to world coordinates.
    pub fn local_to_world(&self) -> Affine {
        let translate = Affine::translate(self.position.to_vec2());
        if self.rotation.abs() < 0.001 {
            return translate;
        }
        Affine::rotate_about(self.rotation, self.as_rect().center()) * translate
    }

    /// Bumps in local coordinates.
    pub fn arcs(&self) -> Vec<CloudArc> {
        self.params().arcs()
    }

    /// Boundary polygon in local coordinates.
    pub fn outline(&self) -> Vec<Point> {
        self.params().outline()
    }

    /// SVG path data in local coordinates, inky when the dash style asks for it.
    pub fn svg_path(&self) -> String {
        self.params().svg_path()
    }

    /// Bézier path of the outline in local coordinates.
    pub fn local_path(&self) -> BezPath {
        let arcs = self.arcs();
        let mut path = BezPath::new();
        let Some(first) = arcs.first() else {
            return path;
        };

        path.move_to(first.left_point);
        for bump in &arcs {
            let svg_arc = SvgArc {
                from: bump.left_point,
                to: bump.right_point,
                radii: Vec2::new(bump.radius, bump.radius),
                x_rotation: 0.0,
                large_arc: false,
                sweep: true,
            };
            match Arc::from_svg_arc(&svg_arc) {
                Some(arc) => path.extend(arc.append_iter(ARC_TOLERANCE)),
                None => path.line_to(bump.right_point),
            }
        }
        path.close_path();
        path
    }
}

impl ShapeTrait for Cloud {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let affine = self.local_to_world();
        let world: Vec<Point> = self.outline().into_iter().map(|p| affine * p).collect();
        if world.is_empty() {
            return self.as_rect();
        }
        points_bounds(&world)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let local = self.local_to_world().inverse() * point;
        if self.style.fill_color.is_some() && self.local_path().contains(local) {
            return true;
        }
        let outline = self.outline();
        point_to_polygon_dist(local, &outline) <= tolerance + self.style.stroke_width() / 2.0
    }

    fn to_path(&self) -> BezPath {
        self.local_to_world() * self.local_path()
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn transform(&mut self, affine: Affine) {
        self.position = affine * self.position;
        // Scale only; rotation is carried by the `rotation` field.
        let scale = affine.as_coeffs();
        self.width *= scale[0].abs();
        self.height *= scale[3].abs();
    }
}
