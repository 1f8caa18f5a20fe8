//! Sampling points around a pill (stadium) perimeter.

use kurbo::{Point, Vec2};
use std::f64::consts::PI;

/// One edge of the pill perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PillSection {
    /// A straight run of length `long_side`.
    Straight {
        start: Point,
        /// Unit direction of travel.
        direction: Vec2,
        seed: u32,
    },
    /// A half circle of the pill radius.
    Arc {
        center: Point,
        /// Angle of the first sample, in radians.
        start_angle: f64,
        seed: u32,
    },
}

impl PillSection {
    pub fn seed(&self) -> u32 {
        match self {
            PillSection::Straight { seed, .. } | PillSection::Arc { seed, .. } => *seed,
        }
    }
}

/// A sampled perimeter point and the seed that keys its jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillPoint {
    pub point: Point,
    pub seed: u32,
}

/// Seed offset between consecutive sections.
const SECTION_SEED_STRIDE: u32 = 1000;

/// Point on the circle at `center` with `radius`, at `angle` radians.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// The four perimeter sections, in winding order.
///
/// Wide pills run clockwise from the top edge; tall pills run from the right
/// edge downwards.
pub fn pill_sections(width: f64, height: f64) -> [PillSection; 4] {
    let radius = width.min(height) / 2.0;
    let seed = |i: u32| i * SECTION_SEED_STRIDE;

    if width > height {
        [
            PillSection::Straight {
                start: Point::new(radius, 0.0),
                direction: Vec2::new(1.0, 0.0),
                seed: seed(0),
            },
            PillSection::Arc {
                center: Point::new(width - radius, radius),
                start_angle: -PI / 2.0,
                seed: seed(1),
            },
            PillSection::Straight {
                start: Point::new(width - radius, height),
                direction: Vec2::new(-1.0, 0.0),
                seed: seed(2),
            },
            PillSection::Arc {
                center: Point::new(radius, radius),
                start_angle: PI / 2.0,
                seed: seed(3),
            },
        ]
    } else {
        [
            PillSection::Straight {
                start: Point::new(width, radius),
                direction: Vec2::new(0.0, 1.0),
                seed: seed(0),
            },
            PillSection::Arc {
                center: Point::new(radius, height - radius),
                start_angle: 0.0,
                seed: seed(1),
            },
            PillSection::Straight {
                start: Point::new(0.0, height - radius),
                direction: Vec2::new(0.0, -1.0),
                seed: seed(2),
            },
            PillSection::Arc {
                center: Point::new(radius, radius),
                start_angle: PI,
                seed: seed(3),
            },
        ]
    }
}

/// Sample points roughly `spacing` apart (by arc length) around the pill
/// inscribed in `width` x `height`.
///
/// Each section stops half a spacing short of its end, so corners are not
/// sampled twice. A spacing that is not strictly positive and finite, or a
/// non-finite size, yields no points.
pub fn pill_points(width: f64, height: f64, spacing: f64) -> Vec<PillPoint> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        log::warn!("Refusing to sample pill with spacing {}", spacing);
        return Vec::new();
    }
    if !(width.is_finite() && height.is_finite()) {
        log::warn!("Refusing to sample pill of size {}x{}", width, height);
        return Vec::new();
    }

    let radius = width.min(height) / 2.0;
    let long_side = width.max(height) - radius * 2.0;
    let dist_to_skip = spacing * 0.5;

    let mut points = Vec::new();
    for section in pill_sections(width, height) {
        let before = points.len();
        match section {
            PillSection::Straight {
                start,
                direction,
                seed,
            } => {
                let mut dist = 0.0;
                let mut i = 0;
                while dist < long_side - dist_to_skip {
                    points.push(PillPoint {
                        point: start + direction * dist,
                        seed: seed + i,
                    });
                    dist += spacing;
                    i += 1;
                }
            }
            PillSection::Arc {
                center,
                start_angle,
                seed,
            } => {
                let mut dist = 0.0;
                let mut i = 0;
                while dist < PI * radius - dist_to_skip {
                    points.push(PillPoint {
                        point: point_on_circle(center, radius, start_angle + dist / radius),
                        seed: seed + i,
                    });
                    dist += spacing;
                    i += 1;
                }
            }
        }
        log::trace!(
            "Pill section {} produced {} points",
            section.seed() / SECTION_SEED_STRIDE,
            points.len() - before
        );
    }

    points
}
