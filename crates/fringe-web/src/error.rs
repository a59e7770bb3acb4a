use std::time::Duration;

use fringe_engine::dispatch::DisplayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("frontend not ready after {0:?}")]
    ReadyTimeout(Duration),
    #[error("transport closed")]
    Closed,
    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<WebError> for DisplayError {
    fn from(err: WebError) -> Self {
        match err {
            WebError::Closed => DisplayError::Disconnected,
            other => DisplayError::Failed(other.to_string()),
        }
    }
}
