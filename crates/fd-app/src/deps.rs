//! Application dependency grouping.
//!
//! Not a builder: no build steps, no defaults, no hidden logic — just the
//! struct that groups the port implementations `App::new` needs.

use std::sync::Arc;

use fd_core::ports::{AdbPort, FastbootPort, FileDialogPort, OperationObserverPort};

/// Port implementations wired in by the shell layer.
pub struct AppDeps {
    pub adb: Arc<dyn AdbPort>,
    pub fastboot: Arc<dyn FastbootPort>,
    pub dialog: Arc<dyn FileDialogPort>,
    pub observer: Arc<dyn OperationObserverPort>,
}
