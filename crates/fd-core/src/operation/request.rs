//! Operation requests submitted by the presentation layer.

use super::{OperationError, RebootMode, Slot, SlotClass};

/// A single operation intent. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    /// Flash an image file to a named partition.
    Flash {
        partition: String,
        image_path: String,
    },
    /// Factory wipe (`fastboot -w`).
    Wipe,
    /// Reboot into the given mode.
    Reboot { mode: RebootMode },
    /// Open the image file picker.
    SelectImage,
    /// Run one device shell command.
    Shell { command: String },
}

impl OperationRequest {
    /// Registry slot this request addresses; non-exclusive kinds have none.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::Flash { .. } => Some(Slot::Flash),
            Self::Wipe => Some(Slot::Wipe),
            Self::Reboot { mode } => Some(Slot::Reboot(*mode)),
            Self::SelectImage | Self::Shell { .. } => None,
        }
    }

    pub fn slot_class(&self) -> SlotClass {
        match self {
            Self::Flash { .. } | Self::Wipe | Self::Reboot { .. } => SlotClass::Destructive,
            Self::SelectImage | Self::Shell { .. } => SlotClass::NonExclusive,
        }
    }

    /// Shape validation. Rejected requests never reach the guard or the
    /// device backend.
    pub fn validate(&self) -> Result<(), OperationError> {
        match self {
            Self::Flash {
                partition,
                image_path,
            } => {
                if partition.trim().is_empty() {
                    return Err(OperationError::InvalidInput(
                        "partition name cannot be empty".into(),
                    ));
                }
                if image_path.trim().is_empty() {
                    return Err(OperationError::InvalidInput(
                        "no image file selected".into(),
                    ));
                }
                Ok(())
            }
            Self::Shell { command } => {
                if command.trim().is_empty() {
                    return Err(OperationError::InvalidInput(
                        "shell command cannot be empty".into(),
                    ));
                }
                Ok(())
            }
            Self::Wipe | Self::Reboot { .. } | Self::SelectImage => Ok(()),
        }
    }
}
