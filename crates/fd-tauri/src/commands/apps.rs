//! Package install/uninstall commands.

use std::sync::Arc;

use tauri::State;

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

#[tauri::command]
pub async fn install_package(
    runtime: State<'_, Arc<AppRuntime>>,
    apk_path: String,
) -> Result<String, String> {
    runtime
        .app
        .install_package()
        .execute(&apk_path)
        .await
        .map_err(map_err)
}

#[tauri::command]
pub async fn uninstall_package(
    runtime: State<'_, Arc<AppRuntime>>,
    package_name: String,
) -> Result<String, String> {
    runtime
        .app
        .uninstall_package()
        .execute(&package_name)
        .await
        .map_err(map_err)
}
