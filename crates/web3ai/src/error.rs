/// Error types for Web3AI operations
use thiserror::Error;

use crate::model::PromptKind;

#[derive(Debug, Error)]
pub enum Web3AiError {
    /// The client handle was never configured (missing key or provider support).
    #[error("Client not initialized")]
    NotInitialized,

    /// The remote completion call failed for any reason.
    #[error("{}: {message}", .kind.failure_prefix())]
    CallFailed { kind: PromptKind, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Web3AiError {
    pub(crate) fn call_failed(kind: PromptKind, message: impl Into<String>) -> Self {
        Self::CallFailed {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Web3AiError>;
