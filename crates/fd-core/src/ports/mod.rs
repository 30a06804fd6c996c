//! Port interfaces for the application layer.
//!
//! Ports define the contract between the operation control logic and the
//! infrastructure implementations (adb/fastboot CLI adapters, the Tauri file
//! dialog). The core depends only on these traits, never on the wire details
//! of the device protocol.

pub mod adb;
pub mod dialog;
pub mod errors;
pub mod fastboot;
pub mod observer;

pub use adb::AdbPort;
pub use dialog::FileDialogPort;
pub use errors::BackendError;
pub use fastboot::FastbootPort;
pub use observer::{NoopOperationObserver, OperationObserverPort};
