//! Pure geometry helpers used by the hotspot engine and the demo animation.

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Segments whose directions form an angle with a sine at or below this
/// value are treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Which segment parameters must fall inside `[0, 1]` for a crossing to count.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionMode {
    /// Both segments are bounded. A reported point lies on both segments.
    #[default]
    Strict,
    /// Only the first segment's parameter is bounded. Reports crossings of the
    /// first segment with the infinite line through the second one.
    OneSided,
}

/// Intersection of the finite segments `a0-a1` and `b0-b1`.
///
/// Parallel, collinear and zero-length inputs yield `None`; collinear overlap
/// is not detected.
#[inline]
pub fn segment_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    intersect(a0, a1, b0, b1, IntersectionMode::Strict)
}

/// Like [`segment_intersection`], but only bounds the parameter along `a0-a1`.
#[inline]
pub fn segment_intersection_one_sided(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    intersect(a0, a1, b0, b1, IntersectionMode::OneSided)
}

/// Segment intersection under an explicit [`IntersectionMode`].
pub fn intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2, mode: IntersectionMode) -> Option<Vec2> {
    let d1 = a1 - a0;
    let d2 = b1 - b0;
    let denom = d1.cross(d2);
    // `denom` is |d1|·|d2|·sin(angle); compare the sine, not the raw product.
    let tolerance = PARALLEL_EPSILON * d1.length() * d2.length();
    if denom.abs() <= tolerance || !denom.is_finite() {
        return None;
    }

    let offset = b0 - a0;
    let t = offset.cross(d2) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    if mode == IntersectionMode::Strict {
        let u = offset.cross(d1) / denom;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
    }

    Some(a0 + d1 * t)
}

/// Rotates `p` about `center` by `angle` radians (counter-clockwise in a
/// y-up frame, clockwise on a y-down canvas).
#[inline]
pub fn rotate_point(p: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    let d = p - center;
    Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c) + center
}

/// Clamps both coordinates of `p` into `[0, width] × [0, height]`.
#[inline]
pub fn clamp_to_canvas(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x.clamp(0.0, width.max(0.0)), p.y.clamp(0.0, height.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── segment_intersection ──────────────────────────────────────────────

    #[test]
    fn crossing_diagonals_meet_at_midpoint() {
        let p = segment_intersection(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0));
        assert_eq!(p, Some(v(5.0, 5.0)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let p = segment_intersection(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 5.0), v(10.0, 5.0));
        assert_eq!(p, None);
    }

    #[test]
    fn collinear_overlap_is_not_reported() {
        let p = segment_intersection(v(0.0, 0.0), v(10.0, 0.0), v(5.0, 0.0), v(15.0, 0.0));
        assert_eq!(p, None);
    }

    #[test]
    fn zero_length_segment_is_not_an_error() {
        let p = segment_intersection(v(3.0, 3.0), v(3.0, 3.0), v(0.0, 0.0), v(10.0, 10.0));
        assert_eq!(p, None);
    }

    #[test]
    fn tiny_crossing_segments_still_intersect() {
        let p = segment_intersection(v(0.0, 0.0), v(0.0005, 0.0005), v(0.0, 0.0005), v(0.0005, 0.0));
        assert!(approx(p.unwrap(), v(0.00025, 0.00025)));
    }

    #[test]
    fn nearly_parallel_long_segments_are_parallel() {
        let p = segment_intersection(v(0.0, 0.0), v(1000.0, 0.0), v(0.0, 1.0), v(1000.0, 0.999_999_9));
        assert_eq!(p, None);
    }

    #[test]
    fn shared_endpoint_counts() {
        let p = segment_intersection(v(0.0, 0.0), v(10.0, 0.0), v(10.0, 0.0), v(10.0, 10.0));
        assert_eq!(p, Some(v(10.0, 0.0)));
    }

    #[test]
    fn miss_beyond_first_segment() {
        // The lines cross at (20, 0), past the end of the first segment.
        let p = segment_intersection(v(0.0, 0.0), v(10.0, 0.0), v(20.0, -5.0), v(20.0, 5.0));
        assert_eq!(p, None);
    }

    // ── one-sided mode ────────────────────────────────────────────────────

    #[test]
    fn strict_rejects_crossing_outside_second_segment() {
        // Second segment stops at y = -5; its line would cross y = 0 at x = 5.
        let a0 = v(0.0, 0.0);
        let a1 = v(10.0, 0.0);
        let b0 = v(5.0, -10.0);
        let b1 = v(5.0, -5.0);
        assert_eq!(segment_intersection(a0, a1, b0, b1), None);
        assert_eq!(segment_intersection_one_sided(a0, a1, b0, b1), Some(v(5.0, 0.0)));
    }

    #[test]
    fn modes_agree_on_true_crossings() {
        let args = (v(100.0, 100.0), v(300.0, 300.0), v(300.0, 100.0), v(100.0, 300.0));
        assert_eq!(
            intersect(args.0, args.1, args.2, args.3, IntersectionMode::Strict),
            intersect(args.0, args.1, args.2, args.3, IntersectionMode::OneSided),
        );
    }

    // ── rotate_point ──────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_about_center() {
        let p = rotate_point(v(2.0, 1.0), v(1.0, 1.0), core::f32::consts::FRAC_PI_2);
        assert!(approx(p, v(1.0, 2.0)), "{p:?}");
    }

    #[test]
    fn full_turn_is_identity() {
        let p = rotate_point(v(500.0, 500.0), v(1000.0, 1000.0), core::f32::consts::TAU);
        assert!(approx(p, v(500.0, 500.0)), "{p:?}");
    }

    // ── clamp_to_canvas ───────────────────────────────────────────────────

    #[test]
    fn clamps_into_canvas() {
        assert_eq!(clamp_to_canvas(v(-5.0, 50.0), 2000.0, 1125.0), v(0.0, 50.0));
        assert_eq!(clamp_to_canvas(v(2500.0, 50.0), 2000.0, 1125.0), v(2000.0, 50.0));
        assert_eq!(clamp_to_canvas(v(10.0, 5000.0), 2000.0, 1125.0), v(10.0, 1125.0));
    }
}
