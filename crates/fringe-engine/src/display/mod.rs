//! Reference displays that live in-process.

mod scene;

pub use scene::SceneDisplay;
