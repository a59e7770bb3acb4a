//! Hotspot overlay: marker points derived from a frame's records.
//!
//! The engine is pure. It reads a snapshot and returns points; the renderer
//! decides how to emit them.

mod engine;

pub use engine::HotspotEngine;
