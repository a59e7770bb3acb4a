//! Coordinate and geometry types shared by the renderer, hotspot engine and displays.
//!
//! Canvas space:
//! - pixels of a fixed-size canvas (see `DisplayConfig::canvas_size`)
//! - origin top-left
//! - +X right, +Y down

mod canvas;
pub mod geometry;
mod rect;
mod vec2;

pub use canvas::Canvas;
pub use geometry::{
    clamp_to_canvas, rotate_point, segment_intersection, segment_intersection_one_sided,
    IntersectionMode,
};
pub use rect::Rect;
pub use vec2::Vec2;
