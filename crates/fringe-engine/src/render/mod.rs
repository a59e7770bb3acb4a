//! Frame producer.
//!
//! The renderer owns the frame store, the hotspot engine, the session style
//! and the dispatcher. Displays are registered with it and receive commands
//! in registration order.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::Renderer;
