//! Child-process execution for external tools.

use std::path::Path;

use fd_core::ports::BackendError;
use tokio::process::Command;
use tracing::debug;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Run `binary` with `args`, capturing both streams.
///
/// Returns trimmed stdout on success. On a non-zero exit the stderr text is
/// folded verbatim into the error message so the UI can surface the tool's
/// own diagnostics.
pub async fn run_tool(
    binary: &Path,
    name: &str,
    args: &[&str],
) -> Result<String, BackendError> {
    debug!(tool = name, ?args, "running tool");

    let mut command = Command::new(binary);
    command.args(args);
    #[cfg(windows)]
    command.creation_flags(CREATE_NO_WINDOW);

    let output = command
        .output()
        .await
        .map_err(|e| BackendError::CommandFailed(format!("failed to run {name}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BackendError::CommandFailed(format!(
            "failed to run {name}: {} (stderr: {})",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
