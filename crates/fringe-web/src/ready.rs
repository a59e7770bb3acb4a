use std::time::Duration;

use tokio::sync::watch;

use crate::WebError;

/// Creates a connected readiness pair, initially not ready.
pub fn ready_channel() -> (ReadySignal, ReadyHandle) {
    let (tx, rx) = watch::channel(false);
    (ReadySignal { tx }, ReadyHandle { rx })
}

/// Transport side: flips readiness once the frontend can accept commands.
#[derive(Debug)]
pub struct ReadySignal {
    tx: watch::Sender<bool>,
}

impl ReadySignal {
    pub fn mark_ready(&self) {
        self.tx.send_replace(true);
    }

    pub fn mark_not_ready(&self) {
        self.tx.send_replace(false);
    }
}

/// Observer side of the readiness signal.
#[derive(Debug, Clone)]
pub struct ReadyHandle {
    rx: watch::Receiver<bool>,
}

impl ReadyHandle {
    #[inline]
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits at most `timeout` for readiness.
    pub async fn wait(&mut self, timeout: Duration) -> Result<(), WebError> {
        match tokio::time::timeout(timeout, self.rx.wait_for(|ready| *ready)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(_)) => Err(WebError::Closed),
            Err(_) => Err(WebError::ReadyTimeout(timeout)),
        }
    }
}
