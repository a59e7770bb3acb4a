use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fringe_engine::dispatch::{Capabilities, Command, Display, DisplayError};
use tokio::sync::mpsc;

use crate::{ready_channel, Envelope, PendingPolicy, ReadyHandle, ReadySignal, WebConfig};

/// Encoded commands issued while the frontend was not ready.
#[derive(Debug, Default)]
struct Held {
    lines: VecDeque<String>,
    dropped: u64,
    /// A discard has been reported since the last release.
    warned: bool,
}

impl Held {
    /// Applies `policy` to `line`. Returns `true` when this call discarded a
    /// command and it is the first discard since the last release.
    fn hold(&mut self, line: String, policy: PendingPolicy, capacity: usize) -> bool {
        let discarded = match policy {
            PendingPolicy::Drop => true,
            PendingPolicy::Buffer if capacity == 0 => true,
            PendingPolicy::Buffer => {
                let full = self.lines.len() >= capacity;
                if full {
                    self.lines.pop_front();
                }
                self.lines.push_back(line);
                full
            }
        };
        if !discarded {
            return false;
        }
        self.dropped += 1;
        !std::mem::replace(&mut self.warned, true)
    }

    fn release(&mut self) -> Vec<String> {
        self.warned = false;
        self.lines.drain(..).collect()
    }
}

fn lock(held: &Mutex<Held>) -> MutexGuard<'_, Held> {
    held.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Transport end of a [`WebDisplay`]: encoded envelopes in send order, and
/// the readiness switch the transport flips once its frontend is connected.
#[derive(Debug)]
pub struct WebLink {
    pub lines: mpsc::UnboundedReceiver<String>,
    ready: ReadySignal,
    held: Arc<Mutex<Held>>,
}

impl WebLink {
    /// Marks the frontend ready and hands back every command held while it
    /// was not, oldest first. The transport must write these before anything
    /// it receives on `lines` afterwards.
    pub fn mark_ready(&self) -> Vec<String> {
        let mut held = lock(&self.held);
        self.ready.mark_ready();
        let released = held.release();
        if !released.is_empty() {
            log::debug!("releasing {} held commands", released.len());
        }
        released
    }

    /// Marks the frontend gone; later commands are held per policy again.
    pub fn mark_not_ready(&self) {
        let _held = lock(&self.held);
        self.ready.mark_not_ready();
    }
}

/// Display that forwards commands to a browser frontend.
///
/// `execute` never blocks: envelopes go onto an unbounded channel and the
/// transport task drains it at its own pace. The frontend only implements
/// the core vocabulary, so squares, splines and color changes are skipped
/// by the dispatcher.
pub struct WebDisplay {
    name: String,
    tx: mpsc::UnboundedSender<String>,
    ready: ReadyHandle,
    policy: PendingPolicy,
    capacity: usize,
    held: Arc<Mutex<Held>>,
}

impl WebDisplay {
    pub fn new(config: &WebConfig) -> (Self, WebLink) {
        let (tx, lines) = mpsc::unbounded_channel();
        let (signal, ready) = ready_channel();
        let held = Arc::new(Mutex::new(Held::default()));
        let display = Self {
            name: "web".to_string(),
            tx,
            ready,
            policy: config.pending,
            capacity: config.pending_capacity,
            held: Arc::clone(&held),
        };
        (display, WebLink { lines, ready: signal, held })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Readiness observer, for waiting on the frontend before the first frame.
    pub fn ready_handle(&self) -> ReadyHandle {
        self.ready.clone()
    }

    pub fn pending_len(&self) -> usize {
        lock(&self.held).lines.len()
    }

    /// Commands discarded while the frontend was not ready.
    pub fn dropped(&self) -> u64 {
        lock(&self.held).dropped
    }
}

impl Display for WebDisplay {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::core()
    }

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError> {
        if !self.capabilities().contains(command.kind()) {
            return Err(DisplayError::Unsupported(command.kind()));
        }
        let line = Envelope::from_command(command).to_json()?;

        // Readiness only flips under this lock, so a line is either held and
        // later released, or sent after every released line.
        let mut held = lock(&self.held);
        if !self.ready.is_ready() {
            if held.hold(line, self.policy, self.capacity) {
                log::warn!("{}: frontend not ready, discarding commands", self.name);
            }
            return Ok(());
        }
        drop(held);

        self.tx.send(line).map_err(|_| DisplayError::Disconnected)
    }
}
