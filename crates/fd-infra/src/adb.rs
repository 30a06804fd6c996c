//! adb CLI adapter.

use async_trait::async_trait;

use fd_core::ports::{AdbPort, BackendError};
use fd_core::{Device, DeviceInfo, RebootMode};

use crate::parse::{parse_adb_devices, parse_battery_level};
use crate::process::run_tool;
use crate::tooling::ToolingPaths;

const UNAVAILABLE: &str = "N/A";

pub struct AdbCli {
    tooling: ToolingPaths,
}

impl AdbCli {
    pub fn new(tooling: ToolingPaths) -> Self {
        Self { tooling }
    }

    async fn run(&self, args: &[&str]) -> Result<String, BackendError> {
        let binary = self.tooling.resolve("adb")?;
        run_tool(&binary, "adb", args).await
    }

    /// Property reads degrade to "N/A" instead of failing the whole
    /// info panel when the device is unreachable.
    async fn get_prop(&self, prop: &str) -> String {
        match self.run(&["shell", "getprop", prop]).await {
            Ok(value) => value,
            Err(_) => UNAVAILABLE.to_string(),
        }
    }

    async fn battery_level(&self) -> String {
        match self.run(&["shell", "dumpsys battery | grep level"]).await {
            Ok(output) => parse_battery_level(&output).unwrap_or_else(|| UNAVAILABLE.to_string()),
            Err(_) => UNAVAILABLE.to_string(),
        }
    }
}

#[async_trait]
impl AdbPort for AdbCli {
    async fn reboot(&self, mode: RebootMode) -> Result<(), BackendError> {
        let mut args = vec!["reboot"];
        if let Some(target) = mode.as_arg() {
            args.push(target);
        }
        self.run(&args).await?;
        Ok(())
    }

    async fn run_shell(&self, command: &str) -> Result<String, BackendError> {
        self.run(&["shell", command]).await
    }

    async fn devices(&self) -> Result<Vec<Device>, BackendError> {
        let output = self.run(&["devices"]).await?;
        Ok(parse_adb_devices(&output))
    }

    async fn device_info(&self) -> Result<DeviceInfo, BackendError> {
        Ok(DeviceInfo {
            model: self.get_prop("ro.product.model").await,
            android_version: self.get_prop("ro.build.version.release").await,
            build_number: self.get_prop("ro.build.id").await,
            battery_level: self.battery_level().await,
        })
    }

    async fn install_package(&self, apk_path: &str) -> Result<String, BackendError> {
        self.run(&["install", "-r", apk_path]).await
    }

    async fn uninstall_package(&self, package: &str) -> Result<String, BackendError> {
        self.run(&["shell", "pm", "uninstall", package]).await
    }
}
