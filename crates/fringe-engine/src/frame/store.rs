use super::Primitive;

/// Primitives recorded since the last frame start.
///
/// Performance characteristics:
/// - `append()` is O(1) amortized
/// - `reset()` keeps allocated capacity, so steady-state frames do not allocate
///
/// The snapshot is a borrow of the store: it cannot outlive the next
/// [`reset`](Self::reset), so records of frame N are never observable once
/// frame N+1 has started.
#[derive(Debug, Default)]
pub struct FrameStore {
    records: Vec<Primitive>,
    frame_index: u64,
}

impl FrameStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded primitives and advances the frame counter.
    #[inline]
    pub fn reset(&mut self) {
        self.records.clear();
        self.frame_index = self.frame_index.wrapping_add(1);
    }

    /// Records a primitive at the end of the current frame.
    #[inline]
    pub fn append(&mut self, record: Primitive) {
        self.records.push(record);
    }

    /// Records in call order.
    #[inline]
    pub fn snapshot(&self) -> &[Primitive] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of resets so far; `0` before the first frame.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
