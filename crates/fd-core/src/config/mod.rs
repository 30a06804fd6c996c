//! Application configuration domain model.
//!
//! Only the shape lives here; loading and saving are infrastructure concerns
//! (`fd-infra::config`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory searched first when resolving the bundled `adb`/`fastboot`
    /// binaries. Unset means the default search order only.
    #[serde(default)]
    pub tool_dir: Option<PathBuf>,
}
