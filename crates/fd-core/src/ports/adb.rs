//! adb port - abstracts the adb side of the device command backend.

use async_trait::async_trait;

use super::BackendError;
use crate::device::{Device, DeviceInfo};
use crate::operation::RebootMode;

/// adb side of the device command backend.
///
/// Every call may block on the device; only the executor invokes these from
/// a spawned task or an async command.
#[async_trait]
pub trait AdbPort: Send + Sync {
    /// Reboot the attached device into the given mode.
    async fn reboot(&self, mode: RebootMode) -> Result<(), BackendError>;

    /// Run a single shell command on the device and return its trimmed
    /// stdout.
    async fn run_shell(&self, command: &str) -> Result<String, BackendError>;

    /// Devices currently visible to adb.
    async fn devices(&self) -> Result<Vec<Device>, BackendError>;

    /// Aggregate model/version/build/battery for the dashboard.
    async fn device_info(&self) -> Result<DeviceInfo, BackendError>;

    /// Install an APK (replace-existing). Returns the installer output.
    async fn install_package(&self, apk_path: &str) -> Result<String, BackendError>;

    /// Uninstall a package by name. Returns the package manager output.
    async fn uninstall_package(&self, package: &str) -> Result<String, BackendError>;
}
