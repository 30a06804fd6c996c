//! Shell session commands: run, transcript, recall.

use std::sync::Arc;

use tauri::State;

use fd_app::usecases::operations::OperationOutcome;
use fd_core::{HistoryEntry, OperationRequest};

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

/// Run one `adb shell` command and await its output. The command and its
/// result (or error) are appended to the session transcript either way.
#[tauri::command]
pub async fn run_shell_command(
    runtime: State<'_, Arc<AppRuntime>>,
    command: String,
) -> Result<String, String> {
    let outcome = runtime
        .app
        .executor()
        .execute(OperationRequest::Shell { command })
        .await
        .map_err(map_err)?;

    match outcome {
        OperationOutcome::Completed { output } => Ok(output.unwrap_or_default()),
        // Shell commands have no dialog to dismiss
        OperationOutcome::Cancelled => Ok(String::new()),
    }
}

/// Full transcript in append order: commands, results, and errors.
#[tauri::command]
pub async fn shell_history(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<HistoryEntry>, String> {
    Ok(runtime.app.session().snapshot())
}

/// Step backwards through previously run commands (arrow-up).
#[tauri::command]
pub async fn shell_recall_previous(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<String>, String> {
    Ok(runtime.app.session().recall_previous())
}

/// Step forwards again (arrow-down); `None` past the newest entry.
#[tauri::command]
pub async fn shell_recall_next(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<String>, String> {
    Ok(runtime.app.session().recall_next())
}
