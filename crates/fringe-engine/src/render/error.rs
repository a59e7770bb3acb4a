use thiserror::Error;

use crate::frame::PrimitiveError;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The primitive violates its contract; nothing was drawn or recorded.
    #[error("malformed primitive: {0}")]
    MalformedPrimitive(#[from] PrimitiveError),
}
