use std::fmt::Write;

use crate::coords::{Canvas, Vec2};
use crate::paint::Color;

use super::{spline_segments, DisplayList, Geometry, Shape};

/// Renders the list, back-to-front, as a standalone SVG document.
pub fn to_svg(list: &mut DisplayList, canvas: Canvas) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        list.background().to_css()
    );
    for item in list.iter_in_paint_order() {
        write_shape(&mut out, &item.shape);
    }
    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    let fill = shape.fill.map_or_else(|| "none".to_string(), Color::to_css);
    let paint = format!(
        r#"stroke="{}" stroke-width="{}" fill="{}" opacity="{}""#,
        shape.stroke.to_css(),
        shape.stroke_width,
        fill,
        shape.opacity
    );

    let _ = match &shape.geometry {
        Geometry::Dot { center, diameter } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" {paint}/>"#,
            center.x,
            center.y,
            diameter / 2.0
        ),
        Geometry::Line([p0, p1]) => writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {paint}/>"#,
            p0.x, p0.y, p1.x, p1.y
        ),
        Geometry::Rect(rect) => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {paint}/>"#,
            rect.origin.x, rect.origin.y, rect.size.x, rect.size.y
        ),
        Geometry::CubicBezier(points) => {
            writeln!(out, r#"  <path d="{}" {paint}/>"#, cubic_path(&[*points]))
        }
        Geometry::Spline(points) => {
            writeln!(out, r#"  <path d="{}" {paint}/>"#, cubic_path(&spline_segments(points)))
        }
    };
}

fn cubic_path(segments: &[[Vec2; 4]]) -> String {
    let mut d = String::new();
    if let Some(first) = segments.first() {
        let _ = write!(d, "M{} {}", first[0].x, first[0].y);
    }
    for [_, c1, c2, end] in segments {
        let _ = write!(d, " C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }
    d
}
