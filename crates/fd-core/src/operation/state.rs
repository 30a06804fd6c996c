//! Per-slot operation lifecycle state.

use serde::{Deserialize, Serialize};

use super::{FailureKind, OperationError};

/// Lifecycle state of one operation slot.
///
/// Transitions for a single slot are totally ordered:
/// `Idle -> Running -> {Succeeded | Cancelled | Failed}`. Terminal states are
/// retained until the next request for the same slot supersedes them; there
/// is no automatic expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationState {
    Idle,
    Running,
    Succeeded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },
    /// Benign user-initiated end state (dismissed dialog). Not an error.
    Cancelled,
    Failed { kind: FailureKind, message: String },
}

impl OperationState {
    /// Terminal states admit no further transition without a new request.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded { .. } | Self::Cancelled | Self::Failed { .. }
        )
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Terminal state for a failed operation, carrying the backend message
    /// verbatim.
    pub fn failed(error: &OperationError) -> Self {
        Self::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn succeeded() -> Self {
        Self::Succeeded { output: None }
    }

    pub fn succeeded_with(output: impl Into<String>) -> Self {
        Self::Succeeded {
            output: Some(output.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!OperationState::Idle.is_terminal());
        assert!(!OperationState::Running.is_terminal());
        assert!(OperationState::succeeded().is_terminal());
        assert!(OperationState::Cancelled.is_terminal());
        assert!(OperationState::failed(&OperationError::Busy).is_terminal());
    }

    #[test]
    fn failed_preserves_backend_message_verbatim() {
        let err = OperationError::Backend("failed to run fastboot flash: exit status 1".into());
        match OperationState::failed(&err) {
            OperationState::Failed { kind, message } => {
                assert_eq!(kind, FailureKind::Backend);
                assert_eq!(message, "failed to run fastboot flash: exit status 1");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(OperationState::Running).unwrap();
        assert_eq!(json["status"], "running");

        let json = serde_json::to_value(OperationState::failed(&OperationError::Busy)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["kind"], "busy");

        // Succeeded without output must not carry a null field
        let json = serde_json::to_value(OperationState::succeeded()).unwrap();
        assert!(json.get("output").is_none());
    }
}
