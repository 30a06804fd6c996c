//! Flashing commands: image selection, partition flash, data wipe.

use std::sync::Arc;

use tauri::State;

use fd_app::usecases::operations::{OperationOutcome, SubmissionId};
use fd_core::OperationRequest;

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

/// Open the native image picker. Returns `None` when the user cancels.
#[tauri::command]
pub async fn select_image_file(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<String>, String> {
    let outcome = runtime
        .app
        .executor()
        .execute(OperationRequest::SelectImage)
        .await
        .map_err(map_err)?;

    match outcome {
        OperationOutcome::Completed { output } => Ok(output),
        OperationOutcome::Cancelled => Ok(None),
    }
}

/// Start a partition flash. Rejected immediately with `Busy` if another
/// destructive operation is running; progress lands on the `flash` slot.
#[tauri::command]
pub async fn flash_partition(
    runtime: State<'_, Arc<AppRuntime>>,
    partition: String,
    image_path: String,
) -> Result<SubmissionId, String> {
    log::info!("Flashing partition '{}' with '{}'", partition, image_path);
    runtime
        .app
        .executor()
        .submit(OperationRequest::Flash {
            partition,
            image_path,
        })
        .map_err(map_err)
}

/// Start a userdata wipe (`fastboot -w`).
#[tauri::command]
pub async fn wipe_data(runtime: State<'_, Arc<AppRuntime>>) -> Result<SubmissionId, String> {
    log::info!("Wiping userdata");
    runtime
        .app
        .executor()
        .submit(OperationRequest::Wipe)
        .map_err(map_err)
}
