//! Shape definitions for the whiteboard.

mod cloud;

pub use cloud::Cloud;

use crate::params::ParamsError;
use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Size class of a shape. Drives bump spacing, ink wobble and stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    S,
    #[default]
    M,
    L,
    Xl,
}

impl SizeStyle {
    pub const ALL: [SizeStyle; 4] = [SizeStyle::S, SizeStyle::M, SizeStyle::L, SizeStyle::Xl];

    /// Multiplier applied to the bump radius to get the spacing between bumps.
    pub fn spacing_modifier(self) -> f64 {
        match self {
            SizeStyle::S => 1.5,
            SizeStyle::M => 1.8,
            SizeStyle::L => 2.6,
            SizeStyle::Xl => 3.6,
        }
    }

    /// Maximum wobble of the second stroke in the inky variant.
    pub fn ink_multiplier(self) -> f64 {
        match self {
            SizeStyle::S => 0.5,
            SizeStyle::M => 0.7,
            SizeStyle::L => 0.9,
            SizeStyle::Xl => 1.6,
        }
    }

    /// Stroke width in canvas units.
    pub fn stroke_width(self) -> f64 {
        match self {
            SizeStyle::S => 2.0,
            SizeStyle::M => 3.5,
            SizeStyle::L => 5.0,
            SizeStyle::Xl => 10.0,
        }
    }

    /// Short name, as used in serialized documents.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeStyle::S => "s",
            SizeStyle::M => "m",
            SizeStyle::L => "l",
            SizeStyle::Xl => "xl",
        }
    }
}

impl fmt::Display for SizeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeStyle {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "small" => Ok(SizeStyle::S),
            "m" | "medium" => Ok(SizeStyle::M),
            "l" | "large" => Ok(SizeStyle::L),
            "xl" | "extra-large" | "extralarge" => Ok(SizeStyle::Xl),
            _ => Err(ParamsError::UnknownSize(s.to_string())),
        }
    }
}

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Hand-inked double stroke.
    #[default]
    Draw,
    Solid,
    Dashed,
    Dotted,
}

impl DashStyle {
    /// Whether the outline is drawn with the inky double stroke.
    pub fn is_inky(self) -> bool {
        matches!(self, DashStyle::Draw)
    }

    /// SVG `stroke-dasharray` for a given stroke width, if any.
    pub fn dash_array(self, stroke_width: f64) -> Option<String> {
        match self {
            DashStyle::Draw | DashStyle::Solid => None,
            DashStyle::Dashed => Some(format!("{} {}", stroke_width * 2.0, stroke_width * 2.0)),
            DashStyle::Dotted => Some(format!("0 {}", stroke_width * 2.0)),
        }
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Size class.
    #[serde(default)]
    pub size: SizeStyle,
    /// Dash style.
    #[serde(default)]
    pub dash: DashStyle,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl ShapeStyle {
    /// Stroke width derived from the size class.
    pub fn stroke_width(&self) -> f64 {
        self.size.stroke_width()
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Set the fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill_color = color.map(|c| c.into());
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            fill_color: None,
            size: SizeStyle::default(),
            dash: DashStyle::default(),
            opacity: 1.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance(a + seg * t)
}

/// Minimum distance from a point to a closed polygon's edges.
pub fn point_to_polygon_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => point.distance(*only),
        [first, .., last] => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(point_to_segment_dist(point, *last, *first), f64::min),
    }
}

/// Axis-aligned bounds of a point set (`Rect::ZERO` when empty).
pub fn points_bounds(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::ZERO;
    }
    let mut rect = Rect::from_points(points[0], points[0]);
    for point in &points[1..] {
        rect = rect.union_pt(*point);
    }
    rect
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Apply a transform to this shape.
    fn transform(&mut self, affine: Affine);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_str() {
        assert_eq!("s".parse::<SizeStyle>().unwrap(), SizeStyle::S);
        assert_eq!("Medium".parse::<SizeStyle>().unwrap(), SizeStyle::M);
        assert_eq!(" xl ".parse::<SizeStyle>().unwrap(), SizeStyle::Xl);
        assert!(matches!(
            "huge".parse::<SizeStyle>(),
            Err(ParamsError::UnknownSize(s)) if s == "huge"
        ));
    }

    #[test]
    fn test_size_display_roundtrip() {
        for size in SizeStyle::ALL {
            assert_eq!(size.to_string().parse::<SizeStyle>().unwrap(), size);
        }
    }

    #[test]
    fn test_size_serde_names() {
        assert_eq!(serde_json::to_string(&SizeStyle::Xl).unwrap(), "\"xl\"");
        let size: SizeStyle = serde_json::from_str("\"l\"").unwrap();
        assert_eq!(size, SizeStyle::L);
    }

    #[test]
    fn test_dash_array() {
        assert!(DashStyle::Draw.dash_array(2.0).is_none());
        assert_eq!(DashStyle::Dashed.dash_array(2.0).as_deref(), Some("4 4"));
        assert_eq!(DashStyle::Dotted.dash_array(2.0).as_deref(), Some("0 4"));
    }

    #[test]
    fn test_style_colors_through_peniko() {
        let mut style = ShapeStyle::default();
        assert_eq!(style.stroke().to_rgba8().a, 255);
        assert!(style.fill().is_none());
        style.set_fill(Some(Color::from_rgba8(16, 32, 48, 128)));
        assert_eq!(style.fill_color, Some(SerializableColor::new(16, 32, 48, 128)));
        let fill = style.fill().map(|c| c.to_rgba8());
        assert_eq!(fill.map(|c| (c.r, c.g, c.b, c.a)), Some((16, 32, 48, 128)));
    }

    #[test]
    fn test_point_to_segment_dist() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((point_to_segment_dist(Point::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        assert!((point_to_segment_dist(Point::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_to_polygon_dist_closes_loop() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        // Nearest edge is the closing one, (0,10) -> (0,0).
        assert!((point_to_polygon_dist(Point::new(-2.0, 5.0), &square) - 2.0).abs() < 1e-9);
        assert!(point_to_polygon_dist(Point::ZERO, &[]).is_infinite());
    }

    #[test]
    fn test_points_bounds() {
        let bounds = points_bounds(&[Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(0.0, 0.0)]);
        assert_eq!(bounds, Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(points_bounds(&[]), Rect::ZERO);
    }
}
