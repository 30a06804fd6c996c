//! Install an APK on the attached device.

use std::sync::Arc;

use tracing::info;

use fd_core::ports::{AdbPort, BackendError};

pub struct InstallPackage {
    adb: Arc<dyn AdbPort>,
}

impl InstallPackage {
    pub fn new(adb: Arc<dyn AdbPort>) -> Self {
        Self { adb }
    }

    /// Replace-existing install; returns the installer output for display.
    pub async fn execute(&self, apk_path: &str) -> Result<String, BackendError> {
        info!(apk = %apk_path, "installing package");
        self.adb.install_package(apk_path).await
    }
}
