//! Native file picker behind the `FileDialogPort`.

use std::path::PathBuf;

use async_trait::async_trait;
use tauri_plugin_dialog::DialogExt;
use tokio::sync::oneshot;

use fd_core::ports::{BackendError, FileDialogPort};

pub struct TauriFileDialog {
    handle: tauri::AppHandle,
}

impl TauriFileDialog {
    pub fn new(handle: tauri::AppHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl FileDialogPort for TauriFileDialog {
    async fn select_image_file(&self) -> Result<Option<PathBuf>, BackendError> {
        let (tx, rx) = oneshot::channel();
        self.handle
            .dialog()
            .file()
            .add_filter("Image Files (*.img)", &["img"])
            .pick_file(move |file| {
                // Receiver may be gone if the command was aborted
                let _ = tx.send(file);
            });

        let picked = rx.await.map_err(|_| {
            BackendError::CommandFailed("file dialog closed without a response".to_string())
        })?;

        match picked {
            Some(path) => path
                .into_path()
                .map(Some)
                .map_err(|e| BackendError::CommandFailed(e.to_string())),
            // User dismissed the dialog: not an error
            None => Ok(None),
        }
    }
}
