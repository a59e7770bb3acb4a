//! Demo animation driving the renderer with moving lines.

mod rotating;

pub use rotating::RotatingLines;
