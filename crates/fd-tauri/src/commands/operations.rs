//! Slot state queries, for polling UIs and reconnection after reload.

use std::sync::Arc;

use tauri::State;

use fd_core::{OperationState, Slot};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::SlotStatePayload;

/// State of one slot by its kebab-case name. Unknown slots are an error;
/// a known slot that never ran reports `idle`.
#[tauri::command]
pub async fn operation_state(
    runtime: State<'_, Arc<AppRuntime>>,
    slot: String,
) -> Result<OperationState, String> {
    let slot = Slot::parse(&slot).ok_or_else(|| format!("unknown operation slot '{slot}'"))?;
    Ok(runtime.app.registry().state(slot))
}

/// All slots and their current states, in display order.
#[tauri::command]
pub async fn operation_states(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<SlotStatePayload>, String> {
    let registry = runtime.app.registry();
    Ok(Slot::all()
        .into_iter()
        .map(|slot| SlotStatePayload {
            slot: slot.to_string(),
            state: registry.state(slot),
        })
        .collect())
}
