//! Fringe engine crate.
//!
//! A frame-buffered vector drawing command layer. A [`render::Renderer`]
//! records primitives per frame, fans them out to registered
//! [`dispatch::Display`]s and, at frame end, emits a hotspot overlay that
//! marks endpoints and line intersections.

pub mod animation;
pub mod config;
pub mod coords;
pub mod dispatch;
pub mod display;
pub mod frame;
pub mod hotspot;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use config::{ConfigError, DisplayConfig, RendererConfig};
pub use render::{RenderError, Renderer};
