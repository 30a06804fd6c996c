//! Operation identity: reboot modes, slots, and slot classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reboot target requested through the utilities view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebootMode {
    Normal,
    Recovery,
    Bootloader,
}

impl RebootMode {
    /// Argument passed to `adb reboot`. Normal reboot omits the argument.
    pub fn as_arg(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Recovery => Some("recovery"),
            Self::Bootloader => Some("bootloader"),
        }
    }

    /// Parse the wire value sent by the frontend; the empty string means a
    /// normal reboot.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" | "normal" => Some(Self::Normal),
            "recovery" => Some(Self::Recovery),
            "bootloader" => Some(Self::Bootloader),
            _ => None,
        }
    }
}

/// The exclusivity/state unit addressed by the guard and the registry.
///
/// Flash, wipe, and each reboot mode are independent slots. All of them
/// share the single destructive lease, so slot state answers "what is this
/// control doing" while the guard answers "may anything destructive start".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Flash,
    Wipe,
    Reboot(RebootMode),
}

impl Slot {
    /// Parse the kebab-case wire form used by the command layer.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flash" => Some(Self::Flash),
            "wipe" => Some(Self::Wipe),
            "reboot" => Some(Self::Reboot(RebootMode::Normal)),
            "reboot-recovery" => Some(Self::Reboot(RebootMode::Recovery)),
            "reboot-bootloader" => Some(Self::Reboot(RebootMode::Bootloader)),
            _ => None,
        }
    }

    /// All destructive slots, in display order.
    pub fn all() -> [Slot; 5] {
        [
            Self::Flash,
            Self::Wipe,
            Self::Reboot(RebootMode::Normal),
            Self::Reboot(RebootMode::Recovery),
            Self::Reboot(RebootMode::Bootloader),
        ]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flash => "flash",
            Self::Wipe => "wipe",
            Self::Reboot(RebootMode::Normal) => "reboot",
            Self::Reboot(RebootMode::Recovery) => "reboot-recovery",
            Self::Reboot(RebootMode::Bootloader) => "reboot-bootloader",
        };
        f.write_str(name)
    }
}

/// Admission class used by the operation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    /// Flash, wipe, reboot: at most one in flight across all five slots.
    Destructive,
    /// File selection and shell commands: never blocked by the guard.
    NonExclusive,
}
