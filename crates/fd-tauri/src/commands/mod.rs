//! Tauri command handlers, grouped by UI surface.

pub mod apps;
pub mod devices;
pub mod dto;
pub mod error;
pub mod flasher;
pub mod operations;
pub mod shell;
pub mod utilities;
