//! Parsers for tool output. Free functions so they test without binaries.

use fd_core::Device;
use regex::Regex;

/// Parse `adb devices` output. The first line is the banner; device lines
/// are exactly two whitespace-separated fields (serial, status).
pub fn parse_adb_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() == 2 {
                Some(Device {
                    serial: parts[0].to_string(),
                    status: parts[1].to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Parse `fastboot devices` output. No banner line; rows are
/// `SERIAL    fastboot`, anything else is noise.
pub fn parse_fastboot_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 2 && parts[1] == "fastboot" {
                Some(Device {
                    serial: parts[0].to_string(),
                    status: parts[1].to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Extract the percentage from a `dumpsys battery | grep level` line,
/// e.g. `  level: 85` becomes `85%`.
pub fn parse_battery_level(output: &str) -> Option<String> {
    let re = Regex::new(r":\s*(\d+)").ok()?;
    let captures = re.captures(output)?;
    Some(format!("{}%", &captures[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adb_devices_skips_banner_and_malformed_lines() {
        let output = "List of devices attached\n\
                      R5CT123ABC\tdevice\n\
                      emulator-5554\toffline\n\
                      * daemon started successfully *";
        let devices = parse_adb_devices(output);
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].serial, "R5CT123ABC");
        assert_eq!(devices[0].status, "device");
        assert_eq!(devices[1].status, "offline");
    }

    #[test]
    fn adb_devices_empty_after_banner() {
        assert!(parse_adb_devices("List of devices attached\n").is_empty());
    }

    #[test]
    fn fastboot_devices_only_keeps_fastboot_rows() {
        let output = "R5CT123ABC\tfastboot\nweird line here extra\nX9\tfastboot";
        let devices = parse_fastboot_devices(output);
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].serial, "R5CT123ABC");
        assert_eq!(devices[1].serial, "X9");
    }

    #[test]
    fn fastboot_devices_empty_output() {
        assert!(parse_fastboot_devices("").is_empty());
    }

    #[test]
    fn battery_level_extracts_percentage() {
        assert_eq!(
            parse_battery_level("  level: 85").as_deref(),
            Some("85%")
        );
    }

    #[test]
    fn battery_level_missing_number() {
        assert!(parse_battery_level("no level here").is_none());
    }
}
