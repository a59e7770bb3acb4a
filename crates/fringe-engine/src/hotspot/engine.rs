use crate::coords::{geometry, IntersectionMode, Vec2};
use crate::frame::Primitive;

/// Computes overlay markers for a frame.
///
/// Output order is deterministic:
/// 1. endpoints of every line, in record order
/// 2. pairwise line intersections, in pair order `(0,1), (0,2), .., (1,2), ..`
/// 3. markers of every non-line record, in record order
///
/// Intersections are O(L²) in the number of lines. That is fine for tens of
/// lines per frame; frames with hundreds of lines want a sweep-line instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HotspotEngine {
    mode: IntersectionMode,
}

impl HotspotEngine {
    #[inline]
    pub const fn new(mode: IntersectionMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> IntersectionMode {
        self.mode
    }

    pub fn compute(&self, records: &[Primitive]) -> Vec<Vec2> {
        let lines: Vec<(Vec2, Vec2)> = records.iter().filter_map(Primitive::as_line).collect();

        let mut out = Vec::with_capacity(records.len() * 2 + lines.len());

        for &(p0, p1) in &lines {
            out.push(p0);
            out.push(p1);
        }

        out.extend(self.intersections(&lines));

        for record in records.iter().filter(|r| r.as_line().is_none()) {
            out.extend(record.markers());
        }

        out
    }

    /// Crossing points of every unordered pair of segments, in pair order.
    pub fn intersections(&self, lines: &[(Vec2, Vec2)]) -> Vec<Vec2> {
        let mut out = Vec::new();
        for (i, &(a0, a1)) in lines.iter().enumerate() {
            for &(b0, b1) in &lines[i + 1..] {
                if let Some(p) = geometry::intersect(a0, a1, b0, b1, self.mode) {
                    out.push(p);
                }
            }
        }
        out
    }
}
