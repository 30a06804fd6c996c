//! Wire shapes shared between commands and frontend events.

use serde::Serialize;

use fd_core::OperationState;

/// One slot's state, with the slot spelled as its kebab-case name
/// ("flash", "wipe", "reboot", "reboot-recovery", "reboot-bootloader").
#[derive(Debug, Clone, Serialize)]
pub struct SlotStatePayload {
    pub slot: String,
    pub state: OperationState,
}
