//! File dialog port - abstracts the native image file picker.

use async_trait::async_trait;
use std::path::PathBuf;

use super::BackendError;

#[async_trait]
pub trait FileDialogPort: Send + Sync {
    /// Open the image picker (filtered to `*.img`).
    ///
    /// `Ok(None)` means the user dismissed the dialog; that is a benign
    /// cancellation, never an error.
    async fn select_image_file(&self) -> Result<Option<PathBuf>, BackendError>;
}
