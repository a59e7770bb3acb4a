//! Static configuration supplied at construction time.
//!
//! `DisplayConfig` is the flat key-value object every display and the renderer
//! are built from. It is never part of the runtime command stream.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::{Canvas, IntersectionMode};
use crate::paint::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Canvas, style defaults and overlay toggles.
///
/// Missing keys fall back to the defaults, so a config file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas `(width, height)` in pixels. Primitives live in this space.
    pub canvas_size: (f32, f32),
    /// Smallest window a windowed frontend may shrink to.
    pub min_win_size: (f32, f32),
    pub bkgd_color: Color,
    pub color_fringing_on: bool,
    pub hotspots_on: bool,
    pub fringing_color: Color,
    pub fringe_width: u32,
    /// Layer the glow is drawn on; must sit below primitives (layer 0).
    pub fringe_z_value: i32,
    pub default_stroke_color: Color,
    pub default_fill_color: Color,
    pub default_stroke_width: f32,
    pub default_alpha: u8,
    /// Diameter of a drawn point.
    pub point_size: f32,
    /// Diameter of a hotspot marker.
    pub hotspot_size: f32,
    pub intersection_mode: IntersectionMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_size: (2000.0, 1125.0),
            min_win_size: (640.0, 480.0),
            bkgd_color: Color::BLACK,
            color_fringing_on: true,
            hotspots_on: true,
            fringing_color: Color::rgb(100, 88, 153),
            fringe_width: 5,
            fringe_z_value: -10,
            default_stroke_color: Color::WHITE,
            default_fill_color: Color::WHITE,
            default_stroke_width: 2.0,
            default_alpha: 255,
            point_size: 2.0,
            hotspot_size: 5.0,
            intersection_mode: IntersectionMode::Strict,
        }
    }
}

impl DisplayConfig {
    /// Loads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: DisplayConfig = if content.trim().is_empty() {
            DisplayConfig::default()
        } else {
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        log::debug!("loaded display config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.canvas().is_valid() {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be positive and finite, got {:?}",
                self.canvas_size
            )));
        }
        if self.color_fringing_on && self.fringe_width == 0 {
            return Err(ConfigError::Invalid(
                "fringe_width must be at least 1 when fringing is on".to_string(),
            ));
        }
        if self.fringe_z_value >= 0 {
            return Err(ConfigError::Invalid(format!(
                "fringe_z_value must be below the primitive layer (0), got {}",
                self.fringe_z_value
            )));
        }
        for (key, value) in [
            ("point_size", self.point_size),
            ("hotspot_size", self.hotspot_size),
            ("default_stroke_width", self.default_stroke_width),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{key} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_size.0, self.canvas_size.1)
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.canvas().aspect_ratio()
    }
}

/// Settings the renderer itself consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub canvas: Canvas,
    pub hotspots_on: bool,
    pub intersection_mode: IntersectionMode,
    /// In-process display calls slower than this are logged.
    pub slow_call_threshold: Duration,
}

impl RendererConfig {
    pub fn from_display(config: &DisplayConfig) -> Self {
        Self {
            canvas: config.canvas(),
            hotspots_on: config.hotspots_on,
            intersection_mode: config.intersection_mode,
            slow_call_threshold: Duration::from_millis(16),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::from_display(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DisplayConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: DisplayConfig = serde_json::from_value(serde_json::json!({
            "canvas_size": [800, 600],
            "hotspots_on": false,
            "fringing_color": [10, 20, 30],
            "intersection_mode": "one_sided",
        }))
        .unwrap();

        assert_eq!(config.canvas_size, (800.0, 600.0));
        assert!(!config.hotspots_on);
        assert_eq!(config.fringing_color, Color::rgb(10, 20, 30));
        assert_eq!(config.intersection_mode, IntersectionMode::OneSided);
        assert_eq!(config.fringe_width, 5);
        assert_eq!(config.hotspot_size, 5.0);
    }

    #[test]
    fn rejects_zero_canvas() {
        let config = DisplayConfig { canvas_size: (0.0, 1125.0), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_zero_fringe_width_only_when_fringing() {
        let mut config = DisplayConfig { fringe_width: 0, ..Default::default() };
        assert!(config.validate().is_err());
        config.color_fringing_on = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_fringe_above_primitives() {
        let config = DisplayConfig { fringe_z_value: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    // ── file loading ──────────────────────────────────────────────────────

    #[test]
    fn load_reads_json_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("display.json");
        std::fs::write(&path, r#"{ "point_size": 4, "bkgd_color": [1, 2, 3] }"#).unwrap();

        let config = DisplayConfig::load(&path).expect("load");
        assert_eq!(config.point_size, 4.0);
        assert_eq!(config.bkgd_color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn load_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("display.json");
        std::fs::write(&path, "  \n").unwrap();

        assert_eq!(DisplayConfig::load(&path).unwrap(), DisplayConfig::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = DisplayConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("display.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DisplayConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("display.json"));
    }
}
