/// Paint layer of a display item.
///
/// Higher values appear on top of lower values. Primitives draw on
/// [`ZIndex::PRIMITIVES`]; the glow sits on a negative layer beneath them and
/// hotspot markers on [`ZIndex::OVERLAY`] above.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const PRIMITIVES: ZIndex = ZIndex(0);
    pub const OVERLAY: ZIndex = ZIndex(10);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
