use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use super::{Capabilities, Command, CommandKind};

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("command {0} is not supported by this display")]
    Unsupported(CommandKind),
    #[error("display is disconnected")]
    Disconnected,
    #[error("display state is poisoned")]
    Poisoned,
    #[error("{0}")]
    Failed(String),
}

/// A consumer of the command stream.
///
/// Displays are rendering sinks: they never record frames or compute
/// hotspots themselves. The renderer sends overlay points as ordinary
/// `DrawPoint` commands with `hotspot = true`.
///
/// `execute` must not block. Displays backed by another thread or an event
/// loop hand commands off and return. The dispatcher enforces no timeout: a
/// slow call is logged after it returns and still counts as delivered.
pub trait Display: Send {
    /// Name used in logs and dispatch reports.
    fn name(&self) -> &str;

    /// Commands this display implements. Others are skipped by the dispatcher.
    fn capabilities(&self) -> Capabilities;

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError>;
}

/// Cloneable handle to a display, so callers can keep inspecting it after
/// registering a clone with the dispatcher.
pub struct Shared<D> {
    name: String,
    inner: Arc<Mutex<D>>,
}

impl<D: Display> Shared<D> {
    pub fn new(display: D) -> Self {
        Self {
            name: display.name().to_string(),
            inner: Arc::new(Mutex::new(display)),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, D>, DisplayError> {
        self.inner.lock().map_err(|_| DisplayError::Poisoned)
    }
}

impl<D> Clone for Shared<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Display> Display for Shared<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        match self.inner.lock() {
            Ok(d) => d.capabilities(),
            Err(_) => Capabilities::none(),
        }
    }

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError> {
        self.lock()?.execute(command)
    }
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError> {
        (**self).execute(command)
    }
}
