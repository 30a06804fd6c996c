//! Uninstall a package from the attached device.

use std::sync::Arc;

use tracing::info;

use fd_core::ports::{AdbPort, BackendError};

pub struct UninstallPackage {
    adb: Arc<dyn AdbPort>,
}

impl UninstallPackage {
    pub fn new(adb: Arc<dyn AdbPort>) -> Self {
        Self { adb }
    }

    pub async fn execute(&self, package: &str) -> Result<String, BackendError> {
        info!(package = %package, "uninstalling package");
        self.adb.uninstall_package(package).await
    }
}
