//! Observer port notified on slot state transitions.

use crate::operation::{OperationState, Slot};

/// Notified by the executor after every registry transition, so the shell
/// layer can push state changes to the webview instead of relying on polling
/// alone. Implementations must be cheap and non-blocking.
pub trait OperationObserverPort: Send + Sync {
    fn state_changed(&self, slot: Slot, state: &OperationState);
}

/// Observer that drops notifications; used in tests and headless runs.
#[derive(Debug, Default)]
pub struct NoopOperationObserver;

impl OperationObserverPort for NoopOperationObserver {
    fn state_changed(&self, _slot: Slot, _state: &OperationState) {}
}
