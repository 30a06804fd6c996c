//! AppHandle-backed implementations of the ports in `fd-core`.

pub mod dialog;
pub mod observer;

pub use dialog::TauriFileDialog;
pub use observer::EventOperationObserver;
