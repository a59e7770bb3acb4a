//! Command vocabulary and fan-out to displays.
//!
//! Displays declare a [`Capabilities`] set up front; the dispatcher checks it
//! before every call instead of probing displays at runtime.

mod command;
mod dispatcher;
mod display;

pub use command::{Capabilities, Command, CommandKind};
pub use dispatcher::{DispatchFailure, DispatchReport, Dispatcher, DisplayId};
pub use display::{Display, DisplayError, Shared};
