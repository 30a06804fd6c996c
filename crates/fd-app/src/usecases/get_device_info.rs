//! Aggregate device properties for the dashboard.

use std::sync::Arc;

use fd_core::ports::{AdbPort, BackendError};
use fd_core::DeviceInfo;

pub struct GetDeviceInfo {
    adb: Arc<dyn AdbPort>,
}

impl GetDeviceInfo {
    pub fn new(adb: Arc<dyn AdbPort>) -> Self {
        Self { adb }
    }

    pub async fn execute(&self) -> Result<DeviceInfo, BackendError> {
        self.adb.device_info().await
    }
}
