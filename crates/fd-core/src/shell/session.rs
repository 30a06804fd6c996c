//! Shell session transcript and command recall.
//!
//! The transcript is append-only. Command entries are appended synchronously
//! at submission; result/error entries are appended when the command
//! completes. Shell invocations run independently of each other, so a fast
//! command issued after a slow one may see its result entry first — that
//! interleaving is intentional (completion order, not submission order) and
//! is asserted by the executor tests.

use super::{HistoryEntry, HistoryEntryKind};

/// Process-lifetime shell state: the transcript plus an independent recall
/// buffer of previously typed commands.
///
/// Entries are never deleted here; clearing is a presentation-layer reset of
/// the whole sequence.
#[derive(Debug, Default)]
pub struct ShellSession {
    transcript: Vec<HistoryEntry>,
    recall: Vec<String>,
    cursor: Option<usize>,
}

impl ShellSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the command echo and remember the raw text for recall.
    /// Duplicates are kept (no dedup); the recall cursor returns to the live
    /// prompt.
    pub fn push_command(&mut self, text: &str) {
        self.transcript.push(HistoryEntry::command(text));
        self.recall.push(text.to_string());
        self.cursor = None;
    }

    pub fn push_result(&mut self, text: &str) {
        self.transcript.push(HistoryEntry::result(text));
    }

    pub fn push_error(&mut self, text: &str) {
        self.transcript.push(HistoryEntry::error(text));
    }

    /// Append a prepared entry. Command entries recorded this way also feed
    /// the recall buffer.
    pub fn append(&mut self, entry: HistoryEntry) {
        if entry.kind == HistoryEntryKind::Command {
            self.recall.push(entry.text.clone());
            self.cursor = None;
        }
        self.transcript.push(entry);
    }

    /// Read-only copy of the transcript, in display order.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.transcript.clone()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Step the recall cursor toward older commands and return the recalled
    /// text. Only the cursor moves; the buffer itself is never mutated.
    /// Stays on the oldest entry once reached.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.recall.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.recall.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        self.recall.get(index).cloned()
    }

    /// Step toward newer commands. Stepping past the newest entry returns
    /// `None` and puts the cursor back on the live prompt.
    pub fn recall_next(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(i) if i + 1 < self.recall.len() => {
                self.cursor = Some(i + 1);
                self.recall.get(i + 1).cloned()
            }
            Some(_) => {
                self.cursor = None;
                None
            }
        }
    }
}
