//! Infrastructure adapters: external tool invocation and configuration.
//!
//! Everything here sits behind the ports defined in `fd-core`; nothing in
//! this crate is reachable except through those traits or the config API.

pub mod adb;
pub mod config;
pub mod fastboot;
pub mod parse;
pub mod process;
pub mod tooling;

pub use adb::AdbCli;
pub use fastboot::FastbootCli;
pub use tooling::ToolingPaths;
