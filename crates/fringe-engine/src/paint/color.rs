use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color with 8-bit channels.
///
/// This is the color model of the command stream: `setStrokeColor` and
/// `setFillColor` carry `r, g, b, [a]` bytes, and configuration files spell
/// colors as `[r, g, b]` or `[r, g, b, a]` arrays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorWire", into = "ColorWire")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` notation, as a canvas 2D frontend expects it.
    pub fn to_css(self) -> String {
        let alpha = self.a as f32 / 255.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, (alpha * 1000.0).round() / 1000.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorWire {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<ColorWire> for Color {
    fn from(wire: ColorWire) -> Self {
        match wire {
            ColorWire::Rgb([r, g, b]) => Color::rgb(r, g, b),
            ColorWire::Rgba([r, g, b, a]) => Color::rgba(r, g, b, a),
        }
    }
}

impl From<Color> for ColorWire {
    fn from(c: Color) -> Self {
        ColorWire::Rgba([c.r, c.g, c.b, c.a])
    }
}
