use crate::config::DisplayConfig;

use super::Color;

/// Glow drawn behind stroked primitives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fringe {
    pub enabled: bool,
    pub color: Color,
    /// Number of glow layers; layer `i` is stroked `2·i` pixels wide.
    pub width: u32,
}

/// Session-scoped drawing state.
///
/// Setters affect subsequent draw calls only; recorded primitives never carry
/// style, so changing a color never restyles what was already drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub fill: Color,
    /// Alpha applied when a color setter omits one.
    pub alpha: u8,
    pub stroke_width: f32,
    pub fringe: Fringe,
}

impl Style {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            stroke: config.default_stroke_color.with_alpha(config.default_alpha),
            fill: config.default_fill_color.with_alpha(config.default_alpha),
            alpha: config.default_alpha,
            stroke_width: config.default_stroke_width,
            fringe: Fringe {
                enabled: config.color_fringing_on,
                color: config.fringing_color,
                width: config.fringe_width,
            },
        }
    }

    /// Sets the stroke color; `alpha = None` uses the session default alpha.
    #[inline]
    pub fn set_stroke(&mut self, r: u8, g: u8, b: u8, alpha: Option<u8>) {
        self.stroke = Color::rgba(r, g, b, alpha.unwrap_or(self.alpha));
    }

    /// Sets the fill color; `alpha = None` uses the session default alpha.
    #[inline]
    pub fn set_fill(&mut self, r: u8, g: u8, b: u8, alpha: Option<u8>) {
        self.fill = Color::rgba(r, g, b, alpha.unwrap_or(self.alpha));
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_config() {
        let style = Style::default();
        assert_eq!(style.stroke, Color::WHITE);
        assert_eq!(style.fill, Color::WHITE);
        assert_eq!(style.stroke_width, 2.0);
        assert!(style.fringe.enabled);
        assert_eq!(style.fringe.color, Color::rgb(100, 88, 153));
        assert_eq!(style.fringe.width, 5);
    }

    #[test]
    fn setters_fall_back_to_session_alpha() {
        let mut style = Style::default();
        style.alpha = 128;
        style.set_stroke(255, 0, 0, None);
        style.set_fill(0, 255, 0, Some(10));
        assert_eq!(style.stroke, Color::rgba(255, 0, 0, 128));
        assert_eq!(style.fill, Color::rgba(0, 255, 0, 10));
    }
}
