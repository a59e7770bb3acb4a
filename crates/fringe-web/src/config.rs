use serde::{Deserialize, Serialize};

/// What the display does with commands issued before the frontend is ready.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingPolicy {
    /// Keep up to `pending_capacity` commands, dropping the oldest, and send
    /// them once ready.
    #[default]
    Buffer,
    /// Discard them.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub pending: PendingPolicy,
    pub pending_capacity: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self { pending: PendingPolicy::Buffer, pending_capacity: 4096 }
    }
}
