use thiserror::Error;

use crate::coords::{Rect, Vec2};

/// A primitive that cannot be drawn as given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimitiveError {
    #[error("spline needs at least 2 points, got {0}")]
    SplineTooShort(usize),
    #[error("{kind} has a non-finite coordinate")]
    NonFinite { kind: &'static str },
    #[error("square size must be non-negative, got {0}")]
    NegativeSize(f32),
}

/// One drawn shape, as recorded for the current frame.
///
/// Records carry geometry only. Style is session state and is never attached
/// to a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point(Vec2),
    Line([Vec2; 2]),
    /// Unfilled square with its top-left corner at `origin`.
    Square { origin: Vec2, size: f32 },
    /// Start, two control points, end.
    CubicBezier([Vec2; 4]),
    /// Smooth curve through the points, in order.
    Spline(Vec<Vec2>),
}

impl Primitive {
    #[inline]
    pub fn line(p0: Vec2, p1: Vec2) -> Self {
        Primitive::Line([p0, p1])
    }

    #[inline]
    pub fn square(origin: Vec2, size: f32) -> Self {
        Primitive::Square { origin, size }
    }

    #[inline]
    pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Primitive::CubicBezier([p0, p1, p2, p3])
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Point(_) => "point",
            Primitive::Line(_) => "line",
            Primitive::Square { .. } => "square",
            Primitive::CubicBezier(_) => "cubic bezier",
            Primitive::Spline(_) => "spline",
        }
    }

    /// Checks the caller contract for this primitive.
    pub fn validate(&self) -> Result<(), PrimitiveError> {
        let finite = match self {
            Primitive::Point(p) => p.is_finite(),
            Primitive::Line(pts) => pts.iter().all(|p| p.is_finite()),
            Primitive::Square { origin, size } => {
                if size.is_finite() && *size < 0.0 {
                    return Err(PrimitiveError::NegativeSize(*size));
                }
                origin.is_finite() && size.is_finite()
            }
            Primitive::CubicBezier(pts) => pts.iter().all(|p| p.is_finite()),
            Primitive::Spline(pts) => {
                if pts.len() < 2 {
                    return Err(PrimitiveError::SplineTooShort(pts.len()));
                }
                pts.iter().all(|p| p.is_finite())
            }
        };

        if finite {
            Ok(())
        } else {
            Err(PrimitiveError::NonFinite { kind: self.kind_name() })
        }
    }

    /// Key points marked by the hotspot overlay.
    ///
    /// Points mark themselves, lines both endpoints, curves their first and
    /// last point only, squares all four corners.
    pub fn markers(&self) -> Vec<Vec2> {
        match self {
            Primitive::Point(p) => vec![*p],
            Primitive::Line([p0, p1]) => vec![*p0, *p1],
            Primitive::Square { origin, size } => Rect::square(*origin, *size).corners().to_vec(),
            Primitive::CubicBezier([p0, _, _, p3]) => vec![*p0, *p3],
            Primitive::Spline(pts) => match (pts.first(), pts.last()) {
                (Some(first), Some(last)) => vec![*first, *last],
                _ => Vec::new(),
            },
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<(Vec2, Vec2)> {
        match self {
            Primitive::Line([p0, p1]) => Some((*p0, *p1)),
            _ => None,
        }
    }
}
