//! Paint model shared by the renderer and displays.
//!
//! Scope:
//! - color representation (straight-alpha 8-bit sRGB, as on the wire)
//! - session style state (stroke/fill colors, default alpha, fringing)

pub mod color;
mod style;

pub use color::Color;
pub use style::{Fringe, Style};
