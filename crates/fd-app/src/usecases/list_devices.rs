//! List devices visible to adb and fastboot.

use std::sync::Arc;

use fd_core::ports::{AdbPort, BackendError, FastbootPort};
use fd_core::Device;

/// Device listing for the dashboard. Read-only and non-exclusive: runs even
/// while a destructive operation holds the lease.
pub struct ListDevices {
    adb: Arc<dyn AdbPort>,
    fastboot: Arc<dyn FastbootPort>,
}

impl ListDevices {
    pub fn new(adb: Arc<dyn AdbPort>, fastboot: Arc<dyn FastbootPort>) -> Self {
        Self { adb, fastboot }
    }

    pub async fn adb_devices(&self) -> Result<Vec<Device>, BackendError> {
        self.adb.devices().await
    }

    pub async fn fastboot_devices(&self) -> Result<Vec<Device>, BackendError> {
        self.fastboot.devices().await
    }
}
