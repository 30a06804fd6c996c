//! # fd-core
//!
//! Core domain models and operation control logic for FlashDeck.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the operation guard and registry, the shell session state,
//! and the port contracts implemented by the adb/fastboot adapters.

pub mod config;
pub mod device;
pub mod operation;
pub mod ports;
pub mod shell;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use device::{Device, DeviceInfo};
pub use operation::{
    FailureKind, GuardToken, OperationError, OperationGuard, OperationRegistry, OperationRequest,
    OperationState, RebootMode, Slot, SlotClass,
};
pub use shell::{HistoryEntry, HistoryEntryKind, ShellSession};
