use super::Vec2;

/// Canvas dimensions in pixels.
///
/// All primitives are expressed in this fixed coordinate space; frontends scale
/// the canvas to their window while preserving its aspect ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }

    /// Clamps `p` into `[0, width] × [0, height]`.
    #[inline]
    pub fn clamp(self, p: Vec2) -> Vec2 {
        super::clamp_to_canvas(p, self.width, self.height)
    }

    /// Largest box with this canvas' aspect ratio that fits inside
    /// `avail_w × avail_h`. Returns `(width, height)`.
    pub fn fit_within(self, avail_w: f32, avail_h: f32) -> (f32, f32) {
        let aspect = self.aspect_ratio();
        let w = avail_w;
        let h = w / aspect;
        if h > avail_h {
            (avail_h * aspect, avail_h)
        } else {
            (w, h)
        }
    }
}
