//! Application assembly: configuration, logging, and runtime construction.

pub mod logging;
pub mod runtime;
pub mod tracing;

pub use runtime::{build_runtime, AppRuntime};
