//! Transcript entries rendered by the shell view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEntryKind {
    Command,
    Result,
    Error,
}

/// One transcript line. Never mutated after append; insertion order is
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: HistoryEntryKind,
    pub text: String,
}

impl HistoryEntry {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            kind: HistoryEntryKind::Command,
            text: text.into(),
        }
    }

    pub fn result(text: impl Into<String>) -> Self {
        Self {
            kind: HistoryEntryKind::Result,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: HistoryEntryKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_frontend_field_names() {
        let json = serde_json::to_value(HistoryEntry::command("getprop")).unwrap();
        assert_eq!(json["type"], "command");
        assert_eq!(json["text"], "getprop");

        let json = serde_json::to_value(HistoryEntry::error("device offline")).unwrap();
        assert_eq!(json["type"], "error");
    }
}
