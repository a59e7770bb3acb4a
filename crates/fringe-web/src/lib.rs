//! Browser display for the fringe engine.
//!
//! Responsibilities:
//! - encode engine commands as `{"command", "params"}` JSON envelopes
//! - deliver them, without blocking the renderer, to a transport task
//! - hold back (or drop) commands until the transport signals readiness
//!
//! The crate does not own a socket. A transport receives encoded lines
//! from [`WebLink`] and writes them wherever the frontend listens;
//! [`transport::pump_lines`] is the stdout JSON-lines variant.

mod config;
mod display;
mod envelope;
mod error;
mod ready;
pub mod transport;

pub use config::{PendingPolicy, WebConfig};
pub use display::{WebDisplay, WebLink};
pub use envelope::{ColorParams, Envelope};
pub use error::WebError;
pub use ready::{ready_channel, ReadyHandle, ReadySignal};
