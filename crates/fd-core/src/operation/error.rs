//! Error taxonomy surfaced by the operation executor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized operation failure.
///
/// Backend message text is preserved verbatim for display; the presentation
/// layer branches only on the variant, never on the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Caller/validation fault. Never reaches the device.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Another destructive operation holds the device lease. Transient; safe
    /// to retry once the current operation completes. The core never retries
    /// on its own.
    #[error("operation already in progress")]
    Busy,

    /// Device or protocol fault reported by the backend.
    #[error("{0}")]
    Backend(String),
}

impl OperationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidInput(_) => FailureKind::InvalidInput,
            Self::Busy => FailureKind::Busy,
            Self::Backend(_) => FailureKind::Backend,
        }
    }
}

/// Failure discriminant carried in terminal `Failed` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidInput,
    Busy,
    Backend,
}
