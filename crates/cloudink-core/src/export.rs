//! Standalone SVG documents for clouds.

use crate::params::CloudParams;
use crate::shapes::{Cloud, ShapeStyle, ShapeTrait, points_bounds};
use kurbo::{Affine, Rect};
use peniko::Color;
use std::fmt::Write;

/// Render a cloud at its world position.
///
/// The view box encloses the cloud's bounds plus `padding` and half the
/// stroke width on every side.
pub fn cloud_to_svg(cloud: &Cloud, padding: f64) -> String {
    render(
        &cloud.svg_path(),
        cloud.local_to_world(),
        cloud.bounds(),
        cloud.style(),
        padding,
    )
}

/// Render a cloud described by bare parameters, anchored at the origin.
pub fn svg_document(params: &CloudParams, style: &ShapeStyle, padding: f64) -> String {
    let outline = params.outline();
    let bounds = if outline.is_empty() {
        Rect::new(0.0, 0.0, params.width.max(0.0), params.height.max(0.0))
    } else {
        points_bounds(&outline)
    };
    render(&params.svg_path(), Affine::IDENTITY, bounds, style, padding)
}

/// `#rrggbb` and alpha in `[0, 1]`; SVG carries alpha in `*-opacity`.
fn svg_color(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        f64::from(rgba.a) / 255.0,
    )
}

fn render(path_data: &str, transform: Affine, bounds: Rect, style: &ShapeStyle, padding: f64) -> String {
    let stroke_width = style.stroke_width();
    let margin = padding.max(0.0) + stroke_width / 2.0;
    let view = bounds.inflate(margin, margin);

    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );

    let (stroke, stroke_alpha) = svg_color(style.stroke());
    let mut attrs = format!(
        r#"d="{path_data}" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round""#
    );
    let stroke_opacity = stroke_alpha * style.opacity;
    if stroke_opacity < 1.0 {
        let _ = write!(attrs, r#" stroke-opacity="{stroke_opacity}""#);
    }
    match style.fill() {
        Some(fill) => {
            let (fill, fill_alpha) = svg_color(fill);
            let _ = write!(attrs, r#" fill="{fill}""#);
            let fill_opacity = fill_alpha * style.opacity;
            if fill_opacity < 1.0 {
                let _ = write!(attrs, r#" fill-opacity="{fill_opacity}""#);
            }
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(dash) = style.dash.dash_array(stroke_width) {
        let _ = write!(attrs, r#" stroke-dasharray="{dash}""#);
    }
    if transform != Affine::IDENTITY {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        let _ = write!(attrs, r#" transform="matrix({a} {b} {c} {d} {e} {f})""#);
    }

    let _ = writeln!(svg, "  <path {attrs}/>");
    svg.push_str("</svg>\n");
    svg
}
