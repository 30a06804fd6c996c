//! Application facade: shared control state plus use case accessors.

use std::sync::Arc;

use fd_core::{OperationGuard, OperationRegistry};

use crate::deps::AppDeps;
use crate::session::ShellSessionHandle;
use crate::usecases::operations::OperationExecutor;
use crate::usecases::{GetDeviceInfo, InstallPackage, ListDevices, UninstallPackage};

/// Central access point for the operation control layer.
///
/// Owns the single guard/registry/session instances and hands out use cases
/// with their dependencies pre-wired (commands call `runtime.app.xxx()`).
pub struct App {
    adb: Arc<dyn fd_core::ports::AdbPort>,
    fastboot: Arc<dyn fd_core::ports::FastbootPort>,
    registry: Arc<OperationRegistry>,
    guard: Arc<OperationGuard>,
    session: ShellSessionHandle,
    executor: Arc<OperationExecutor>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let guard = Arc::new(OperationGuard::new());
        let registry = Arc::new(OperationRegistry::new());
        let session = ShellSessionHandle::new();
        let executor = Arc::new(OperationExecutor::new(
            Arc::clone(&deps.adb),
            Arc::clone(&deps.fastboot),
            deps.dialog,
            deps.observer,
            Arc::clone(&guard),
            Arc::clone(&registry),
            session.clone(),
        ));

        Self {
            adb: deps.adb,
            fastboot: deps.fastboot,
            registry,
            guard,
            session,
            executor,
        }
    }

    /// The operation executor (flash/wipe/reboot/select/shell).
    pub fn executor(&self) -> Arc<OperationExecutor> {
        Arc::clone(&self.executor)
    }

    /// Slot state registry, for the polling commands.
    pub fn registry(&self) -> Arc<OperationRegistry> {
        Arc::clone(&self.registry)
    }

    /// Destructive-lease guard (exposed for diagnostics and tests).
    pub fn guard(&self) -> Arc<OperationGuard> {
        Arc::clone(&self.guard)
    }

    /// Shell transcript/recall handle.
    pub fn session(&self) -> &ShellSessionHandle {
        &self.session
    }

    pub fn list_devices(&self) -> ListDevices {
        ListDevices::new(Arc::clone(&self.adb), Arc::clone(&self.fastboot))
    }

    pub fn get_device_info(&self) -> GetDeviceInfo {
        GetDeviceInfo::new(Arc::clone(&self.adb))
    }

    pub fn install_package(&self) -> InstallPackage {
        InstallPackage::new(Arc::clone(&self.adb))
    }

    pub fn uninstall_package(&self) -> UninstallPackage {
        UninstallPackage::new(Arc::clone(&self.adb))
    }
}
