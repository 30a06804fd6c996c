//! Runtime construction in the Tauri setup phase.
//!
//! The adb/fastboot adapters only need configuration, but the dialog and
//! event observer adapters need an `AppHandle`, so the whole `App` is wired
//! here once Tauri setup provides one.

use std::sync::Arc;

use fd_app::{App, AppDeps};
use fd_core::AppConfig;
use fd_infra::{AdbCli, FastbootCli, ToolingPaths};

use crate::adapters::{EventOperationObserver, TauriFileDialog};

/// The completed application runtime, managed by Tauri's state system.
pub struct AppRuntime {
    pub app: Arc<App>,
}

impl AppRuntime {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }
}

/// Build the runtime from configuration and the setup-phase `AppHandle`.
pub fn build_runtime(config: &AppConfig, app_handle: &tauri::AppHandle) -> AppRuntime {
    let tooling = ToolingPaths::new(config.tool_dir.clone());

    let deps = AppDeps {
        adb: Arc::new(AdbCli::new(tooling.clone())),
        fastboot: Arc::new(FastbootCli::new(tooling)),
        dialog: Arc::new(TauriFileDialog::new(app_handle.clone())),
        observer: Arc::new(EventOperationObserver::new(app_handle.clone())),
    };

    AppRuntime::new(Arc::new(App::new(deps)))
}
