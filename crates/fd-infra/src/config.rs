//! Application configuration persisted as TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fd_core::AppConfig;
use tracing::info;

/// Default location: `<config_dir>/flashdeck/config.toml`.
pub fn config_file_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("no platform configuration directory")?;
    Ok(base.join("flashdeck").join("config.toml"))
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load() -> Result<AppConfig> {
    load_from(&config_file_path()?)
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config at {}", path.display()))?;
    Ok(config)
}

pub fn save(config: &AppConfig) -> Result<()> {
    save_to(config, &config_file_path()?)
}

pub fn save_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(config).context("serializing config")?;
    std::fs::write(path, text)
        .with_context(|| format!("writing config at {}", path.display()))?;
    info!(path = %path.display(), "saved configuration");
    Ok(())
}
