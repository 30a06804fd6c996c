//! Logging configuration.
//!
//! ## Environment Behavior
//!
//! - **Development**: Debug level, outputs to the Webview console
//! - **Production**: Info level, outputs to log file + stdout

use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Create the logging builder with appropriate configuration.
///
/// Filters Tauri/wry internals; in production `ipc::request` noise is
/// dropped as well. Returns a builder for `.plugin()` in the Tauri builder.
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let default_log_level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(default_log_level)
        .filter(move |metadata| {
            let is_basic_noise = metadata.target().starts_with("tauri::")
                || metadata.target().starts_with("tracing::")
                || metadata.target().contains("tauri-")
                || metadata.target().starts_with("wry::");

            if is_dev {
                !is_basic_noise
            } else {
                !is_basic_noise && !metadata.target().contains("ipc::request")
            }
        });

    if is_dev {
        builder = builder.target(Target::new(TargetKind::Webview));
    } else {
        builder = builder
            .target(Target::new(TargetKind::LogDir {
                file_name: Some("flashdeck.log".to_string()),
            }))
            .target(Target::new(TargetKind::Stdout));
    }

    builder
}
