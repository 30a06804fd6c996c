//! Attached-device models shown on the dashboard.

use serde::{Deserialize, Serialize};

/// One line of `adb devices` / `fastboot devices` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub serial: String,
    pub status: String,
}

/// Aggregated device properties for the dashboard header.
///
/// Fields that cannot be read (device offline, permission denied) are
/// reported as `"N/A"` rather than failing the whole query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub model: String,
    pub android_version: String,
    pub build_number: String,
    pub battery_level: String,
}
