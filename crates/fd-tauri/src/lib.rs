//! Tauri adapter layer: commands, AppHandle-backed ports, and bootstrap.

pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::AppRuntime;
