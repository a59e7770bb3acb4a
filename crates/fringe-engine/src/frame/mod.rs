//! Frame element model.
//!
//! Responsibilities:
//! - define the recorded primitive variants and their overlay markers
//! - hold the single per-frame record list shared by every display

mod primitive;
mod store;

pub use primitive::{Primitive, PrimitiveError};
pub use store::FrameStore;
