use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Outline of a display item, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Filled disc; used for points and hotspot markers.
    Dot { center: Vec2, diameter: f32 },
    Line([Vec2; 2]),
    CubicBezier([Vec2; 4]),
    Rect(Rect),
    /// Curve through the points; see [`spline_segments`](super::spline_segments).
    Spline(Vec<Vec2>),
}

/// A stroked (and optionally filled) outline with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub stroke: Color,
    pub stroke_width: f32,
    pub fill: Option<Color>,
    /// Layer opacity in `[0, 1]`, applied on top of the colors' own alpha.
    pub opacity: f32,
}

impl Shape {
    #[inline]
    pub fn stroked(geometry: Geometry, stroke: Color, stroke_width: f32) -> Self {
        Self { geometry, stroke, stroke_width, fill: None, opacity: 1.0 }
    }

    #[inline]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Converts a Catmull-Rom spline through `points` into cubic Bézier segments
/// `[start, c1, c2, end]`.
///
/// End tangents reuse the first and last point, so the curve starts and ends
/// exactly on them. Fewer than two points yield no segments.
pub fn spline_segments(points: &[Vec2]) -> Vec<[Vec2; 4]> {
    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            let c1 = p1 + (p2 - p0) / 6.0;
            let c2 = p2 - (p3 - p1) / 6.0;
            [p1, c1, c2, p2]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn spline_segments_pass_through_points() {
        let pts = [v(0.0, 0.0), v(10.0, 10.0), v(20.0, 0.0), v(30.0, 10.0)];
        let segs = spline_segments(&pts);
        assert_eq!(segs.len(), 3);
        for (i, seg) in segs.iter().enumerate() {
            assert_eq!(seg[0], pts[i]);
            assert_eq!(seg[3], pts[i + 1]);
        }
    }

    #[test]
    fn two_point_spline_is_straight() {
        let segs = spline_segments(&[v(0.0, 0.0), v(6.0, 0.0)]);
        assert_eq!(segs, vec![[v(0.0, 0.0), v(1.0, 0.0), v(5.0, 0.0), v(6.0, 0.0)]]);
    }

    #[test]
    fn short_input_has_no_segments() {
        assert!(spline_segments(&[v(1.0, 1.0)]).is_empty());
        assert!(spline_segments(&[]).is_empty());
    }
}
