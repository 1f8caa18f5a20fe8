//! Cloud bumps: jittered perimeter points joined by outward-bulging arcs.

use super::pill::{pill_points, point_on_circle};
use crate::rng::{Generator, RandomSource, Xorshift};
use crate::shapes::SizeStyle;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Number of samples per bump in [`cloud_outline`].
pub const OUTLINE_POINTS_PER_ARC: usize = 10;

/// One bump of the cloud: a circular arc from `left_point` to `right_point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudArc {
    pub left_point: Point,
    pub right_point: Point,
    pub center: Point,
    pub radius: f64,
}

/// Radius of an average bump for a cloud of the given size, in `[1, 50]`.
pub fn bump_radius(width: f64, height: f64) -> f64 {
    ((width + height) / 13.0).clamp(1.0, 50.0)
}

/// Signed shortest angular distance from `a0` to `a1`, in `(-PI, PI]`.
pub fn short_angle_dist(a0: f64, a1: f64) -> f64 {
    let da = (a1 - a0) % TAU;
    ((2.0 * da) % TAU) - da
}

/// Angle of the vector from `from` to `to`.
fn angle_between(from: Point, to: Point) -> f64 {
    (to - from).atan2()
}

/// Jittered bump vertices for a `width` x `height` cloud.
pub fn cloud_arc_points(width: f64, height: f64, seed: &str, size: SizeStyle) -> Vec<Point> {
    cloud_arc_points_with(&Xorshift, width, height, seed, size)
}

/// [`cloud_arc_points`] with an explicit random source.
///
/// Each point's wobble comes from a generator keyed by `seed` followed by the
/// point's own seed, so it does not depend on any other point.
pub fn cloud_arc_points_with<R: RandomSource>(
    source: &R,
    width: f64,
    height: f64,
    seed: &str,
    size: SizeStyle,
) -> Vec<Point> {
    let mut random = source.generator(seed);
    let radius = bump_radius(width, height);
    let spacing = radius * size.spacing_modifier() + random.next_f64() * radius * 0.4;
    let wiggle = radius / 6.0;

    let points = pill_points(width, height, spacing);
    log::debug!(
        "Cloud {}x{} ({}): spacing {:.3}, {} bumps",
        width,
        height,
        size,
        spacing,
        points.len()
    );

    points
        .into_iter()
        .map(|p| {
            let point_seed = format!("{seed}{}", p.seed);
            let dx = source.generator(&point_seed).next_f64() * wiggle;
            let dy = source.generator(&point_seed).next_f64() * wiggle;
            Point::new(p.point.x + dx, p.point.y + dy)
        })
        .collect()
}

/// The bump joining `left_point` to `right_point`.
///
/// The arc's center sits a third of the chord length off the chord midpoint,
/// on the right-hand side when walking from left to right, so the arc bulges
/// out of a clockwise outline.
pub fn cloud_arc(left_point: Point, right_point: Point) -> CloudArc {
    let mid = left_point.midpoint(right_point);
    let offset_angle = angle_between(mid, left_point) - FRAC_PI_2;
    let center = mid + Vec2::from_angle(offset_angle) * (left_point.distance(right_point) / 3.0);

    CloudArc {
        left_point,
        right_point,
        center,
        radius: center.distance(left_point),
    }
}

/// All bumps of a cloud, closing back on the first point.
pub fn cloud_arcs(width: f64, height: f64, seed: &str, size: SizeStyle) -> Vec<CloudArc> {
    cloud_arcs_with(&Xorshift, width, height, seed, size)
}

/// [`cloud_arcs`] with an explicit random source.
pub fn cloud_arcs_with<R: RandomSource>(
    source: &R,
    width: f64,
    height: f64,
    seed: &str,
    size: SizeStyle,
) -> Vec<CloudArc> {
    arcs_through(&cloud_arc_points_with(source, width, height, seed, size))
}

/// Join a cyclic point sequence with bumps.
pub fn arcs_through(points: &[Point]) -> Vec<CloudArc> {
    (0..points.len())
        .map(|i| cloud_arc(points[i], points[(i + 1) % points.len()]))
        .collect()
}

/// `num_points` evenly spaced points on the shorter arc from `start` to `end`
/// around `center`.
///
/// Both endpoints are included. A single point yields just the start.
pub fn points_on_arc(start: Point, end: Point, center: Point, radius: f64, num_points: usize) -> Vec<Point> {
    let start_angle = angle_between(center, start);
    let end_angle = angle_between(center, end);
    let sweep = short_angle_dist(start_angle, end_angle);
    let steps = num_points.saturating_sub(1).max(1) as f64;

    (0..num_points)
        .map(|i| point_on_circle(center, radius, start_angle + sweep * (i as f64 / steps)))
        .collect()
}

/// Polygon approximating the whole cloud boundary.
pub fn cloud_outline(width: f64, height: f64, seed: &str, size: SizeStyle) -> Vec<Point> {
    cloud_outline_with(&Xorshift, width, height, seed, size)
}

/// [`cloud_outline`] with an explicit random source.
pub fn cloud_outline_with<R: RandomSource>(
    source: &R,
    width: f64,
    height: f64,
    seed: &str,
    size: SizeStyle,
) -> Vec<Point> {
    outline_of(&cloud_arcs_with(source, width, height, seed, size))
}

/// Polygon approximating a list of bumps.
pub fn outline_of(arcs: &[CloudArc]) -> Vec<Point> {
    arcs.iter()
        .flat_map(|arc| {
            points_on_arc(
                arc.left_point,
                arc.right_point,
                arc.center,
                arc.radius,
                OUTLINE_POINTS_PER_ARC,
            )
        })
        .collect()
}
