//! Locating the bundled adb/fastboot binaries.

use std::path::{Path, PathBuf};

use fd_core::ports::BackendError;
use tracing::debug;

/// Resolves tool names to executable paths.
///
/// Binaries ship alongside the application under `bin/<platform>/`. The
/// search order is: an explicit override directory from configuration, the
/// working directory, the directory of the running executable, and finally
/// the flat `bin/` layout older installs used.
#[derive(Debug, Clone, Default)]
pub struct ToolingPaths {
    override_dir: Option<PathBuf>,
}

impl ToolingPaths {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// Resolve `name` to an absolute path, or fail if no candidate exists.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, BackendError> {
        let platform = std::env::consts::OS;
        let file_name = if cfg!(windows) {
            format!("{name}.exe")
        } else {
            name.to_string()
        };

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = &self.override_dir {
            candidates.push(dir.join(&file_name));
        }
        candidates.push(Path::new(".").join("bin").join(platform).join(&file_name));

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        if let Some(dir) = &exe_dir {
            candidates.push(dir.join("bin").join(platform).join(&file_name));
        }

        // Legacy fallback: flat bin layout so older installs still run.
        candidates.push(Path::new(".").join("bin").join(&file_name));
        if let Some(dir) = &exe_dir {
            candidates.push(dir.join("bin").join(&file_name));
        }

        for candidate in candidates {
            if candidate.is_file() {
                debug!(tool = name, path = %candidate.display(), "resolved tool binary");
                if candidate.is_absolute() {
                    return Ok(candidate);
                }
                return std::path::absolute(&candidate)
                    .map_err(|e| BackendError::CommandFailed(e.to_string()));
            }
        }

        Err(BackendError::ToolNotFound {
            name: name.to_string(),
            platform: platform.to_string(),
        })
    }
}
