//! Use cases exposed to the command layer.

pub mod get_device_info;
pub mod install_package;
pub mod list_devices;
pub mod operations;
pub mod uninstall_package;

pub use get_device_info::GetDeviceInfo;
pub use install_package::InstallPackage;
pub use list_devices::ListDevices;
pub use uninstall_package::UninstallPackage;
