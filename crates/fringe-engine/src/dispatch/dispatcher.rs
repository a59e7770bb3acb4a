use std::time::{Duration, Instant};

use super::{Command, Display, DisplayError};

/// Index of a registered display, in registration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DisplayId(pub usize);

/// A display that returned an error for one command.
#[derive(Debug)]
pub struct DispatchFailure {
    pub display: DisplayId,
    pub name: String,
    pub error: DisplayError,
}

/// Outcome of delivering one command to every registered display.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub delivered: usize,
    pub skipped: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn absorb(&mut self, other: DispatchReport) {
        self.delivered += other.delivered;
        self.skipped += other.skipped;
        self.failures.extend(other.failures);
    }
}

/// Fans commands out to displays in registration order.
///
/// - displays whose capabilities lack a command are skipped (logged at debug)
/// - a display error is logged and recorded, and delivery continues with the
///   next display
pub struct Dispatcher {
    displays: Vec<Box<dyn Display>>,
    slow_call_threshold: Duration,
}

impl Dispatcher {
    pub fn new(slow_call_threshold: Duration) -> Self {
        Self { displays: Vec::new(), slow_call_threshold }
    }

    pub fn register(&mut self, display: impl Display + 'static) -> DisplayId {
        let id = DisplayId(self.displays.len());
        log::debug!(
            "registered display {:?} as #{} (capabilities: {:?})",
            display.name(),
            id.0,
            display.capabilities().iter().map(|k| k.name()).collect::<Vec<_>>()
        );
        self.displays.push(Box::new(display));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.displays.iter().map(|d| d.name())
    }

    pub fn dispatch(&mut self, command: &Command) -> DispatchReport {
        let kind = command.kind();
        let mut report = DispatchReport::default();

        for (index, display) in self.displays.iter_mut().enumerate() {
            if !display.capabilities().contains(kind) {
                log::debug!("display {:?} does not support {kind}; skipped", display.name());
                report.skipped += 1;
                continue;
            }

            let started = Instant::now();
            let result = display.execute(command);
            let elapsed = started.elapsed();
            if elapsed > self.slow_call_threshold {
                log::warn!(
                    "display {:?} took {:?} for {kind} (threshold {:?})",
                    display.name(),
                    elapsed,
                    self.slow_call_threshold
                );
            }

            match result {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    log::warn!("display {:?} failed on {kind}: {error}", display.name());
                    report.failures.push(DispatchFailure {
                        display: DisplayId(index),
                        name: display.name().to_string(),
                        error,
                    });
                }
            }
        }

        report
    }

    /// Dispatches each command in order and merges the reports.
    pub fn dispatch_all<'c>(&mut self, commands: impl IntoIterator<Item = &'c Command>) -> DispatchReport {
        let mut report = DispatchReport::default();
        for command in commands {
            report.absorb(self.dispatch(command));
        }
        report
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}
