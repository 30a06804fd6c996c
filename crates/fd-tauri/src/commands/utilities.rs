//! Device utility commands.

use std::sync::Arc;

use tauri::State;

use fd_app::usecases::operations::SubmissionId;
use fd_core::{OperationRequest, RebootMode};

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

/// Reboot the device. `mode` is `""`/`"normal"`, `"recovery"`, or
/// `"bootloader"`; each mode has its own state slot.
#[tauri::command]
pub async fn reboot_device(
    runtime: State<'_, Arc<AppRuntime>>,
    mode: String,
) -> Result<SubmissionId, String> {
    let mode = RebootMode::parse(&mode)
        .ok_or_else(|| format!("invalid input: unknown reboot mode '{mode}'"))?;
    log::info!("Rebooting device into {:?}", mode);
    runtime
        .app
        .executor()
        .submit(OperationRequest::Reboot { mode })
        .map_err(map_err)
}
