//! SVG path strings for cloud outlines.

use super::cloud::{CloudArc, cloud_arcs_with};
use crate::rng::{Generator, RandomSource, Xorshift};
use crate::shapes::SizeStyle;
use std::fmt::Write;

/// Append one clockwise bump ending at `(x, y)`.
fn push_arc(path: &mut String, radius: f64, x: f64, y: f64) {
    // Writing to a String cannot fail.
    let _ = write!(path, " A{radius},{radius} 0 0,1 {x},{y}");
}

/// Single-stroke path through the given bumps.
///
/// An empty arc list renders as an empty string.
pub fn arcs_svg_path(arcs: &[CloudArc]) -> String {
    let Some(first) = arcs.first() else {
        return String::new();
    };
    let mut path = format!("M{},{}", first.left_point.x, first.left_point.y);
    for arc in arcs {
        push_arc(&mut path, arc.radius, arc.right_point.x, arc.right_point.y);
    }
    path.push_str(" Z");
    path
}

/// Single-stroke cloud outline as an SVG path.
pub fn cloud_svg_path(width: f64, height: f64, seed: &str, size: SizeStyle) -> String {
    cloud_svg_path_with(&Xorshift, width, height, seed, size)
}

/// [`cloud_svg_path`] with an explicit random source.
pub fn cloud_svg_path_with<R: RandomSource>(
    source: &R,
    width: f64,
    height: f64,
    seed: &str,
    size: SizeStyle,
) -> String {
    arcs_svg_path(&cloud_arcs_with(source, width, height, seed, size))
}

/// Hand-inked cloud outline: the plain stroke followed by a second, wobbly
/// copy whose endpoints are nudged by up to twice the size's ink multiplier.
pub fn inky_cloud_svg_path(width: f64, height: f64, seed: &str, size: SizeStyle) -> String {
    inky_cloud_svg_path_with(&Xorshift, width, height, seed, size)
}

/// [`inky_cloud_svg_path`] with an explicit random source.
pub fn inky_cloud_svg_path_with<R: RandomSource>(
    source: &R,
    width: f64,
    height: f64,
    seed: &str,
    size: SizeStyle,
) -> String {
    let arcs = cloud_arcs_with(source, width, height, seed, size);
    let Some(first) = arcs.first() else {
        return String::new();
    };

    // One generator for the whole second stroke, drawn x then y per endpoint.
    let mut random = source.generator(seed);
    let multiplier = size.ink_multiplier();
    let mut wobble = |n: f64| n + random.next_f64() * multiplier * 2.0;

    let mut path_a = format!("M{},{}", first.left_point.x, first.left_point.y);
    let mut path_b = format!("M{},{}", wobble(first.left_point.x), wobble(first.left_point.y));
    for arc in &arcs {
        push_arc(&mut path_a, arc.radius, arc.right_point.x, arc.right_point.y);
        let x = wobble(arc.right_point.x);
        let y = wobble(arc.right_point.y);
        push_arc(&mut path_b, arc.radius, x, y);
    }

    path_a.push_str(&path_b);
    path_a.push_str(" Z");
    path_a
}
