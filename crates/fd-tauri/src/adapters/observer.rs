//! Forwards slot state transitions to the frontend as Tauri events.

use tauri::Emitter;

use fd_core::ports::OperationObserverPort;
use fd_core::{OperationState, Slot};

use crate::commands::dto::SlotStatePayload;

/// Event name the frontend listens on for live slot state updates.
pub const OPERATION_STATE_EVENT: &str = "operation-state";

pub struct EventOperationObserver {
    handle: tauri::AppHandle,
}

impl EventOperationObserver {
    pub fn new(handle: tauri::AppHandle) -> Self {
        Self { handle }
    }
}

impl OperationObserverPort for EventOperationObserver {
    fn state_changed(&self, slot: Slot, state: &OperationState) {
        let payload = SlotStatePayload {
            slot: slot.to_string(),
            state: state.clone(),
        };
        if let Err(e) = self.handle.emit(OPERATION_STATE_EVENT, payload) {
            tracing::warn!(slot = %slot, error = %e, "failed to emit operation state event");
        }
    }
}
