//! The crate-wide error type for agent operations.

use thiserror::Error;

/// Errors that an [`Agent`](crate::agent::Agent) operation can return.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The operation is a permanent contract gap for this agent variant
    /// (e.g. `update` on a composite that cannot train its limbs jointly).
    /// Callers must treat this as fatal misuse, not a retryable fault.
    #[error("operation `{0}` is not supported by this agent")]
    Unsupported(&'static str),

    /// Any other failure raised by a concrete agent implementation
    /// (model inference, checkpoint I/O, ...).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AgentError {
    /// Whether this error is the permanent [`Unsupported`](Self::Unsupported)
    /// restriction rather than a transient fault.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
