//! Device listing and info commands for the dashboard.

use std::sync::Arc;

use tauri::State;

use fd_core::{Device, DeviceInfo};

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

#[tauri::command]
pub async fn get_adb_devices(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<Device>, String> {
    runtime
        .app
        .list_devices()
        .adb_devices()
        .await
        .map_err(map_err)
}

#[tauri::command]
pub async fn get_fastboot_devices(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Vec<Device>, String> {
    runtime
        .app
        .list_devices()
        .fastboot_devices()
        .await
        .map_err(map_err)
}

/// Aggregated device properties; fields degrade to "N/A" individually
/// rather than failing the whole panel.
#[tauri::command]
pub async fn get_device_info(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<DeviceInfo, String> {
    runtime.app.get_device_info().execute().await.map_err(map_err)
}
