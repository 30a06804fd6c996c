//! Tracing subscriber initialization for structured, span-aware logging.
//!
//! The `log` crate (via tauri-plugin-log) and `tracing` run side by side:
//! commands log through `log::`, the executor and adapters emit `tracing`
//! spans and events.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "tauri=warn".to_string(),
        "wry=off".to_string(),
        "ipc::request=off".to_string(),
        if is_dev {
            "fd_infra=debug"
        } else {
            "fd_infra=info"
        }
        .to_string(),
        if is_dev { "fd_app=debug" } else { "fd_app=info" }.to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to debug in dev and
/// info in production, with Tauri internals filtered. Call once in `main`
/// before the Tauri builder runs. Returns `Err` if a subscriber is already
/// registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_layer = fmt::layer()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
