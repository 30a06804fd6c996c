//! Shared handle over the shell session state.

use std::sync::{Arc, Mutex, MutexGuard};

use fd_core::{HistoryEntry, ShellSession};

/// Cloneable handle giving the executor and the command layer access to the
/// single process-wide shell session.
///
/// The lock is held only for the duration of one append or one read, never
/// across a backend call, so concurrent shell invocations interleave freely
/// (completion-order transcript semantics).
#[derive(Clone, Default)]
pub struct ShellSessionHandle {
    inner: Arc<Mutex<ShellSession>>,
}

impl ShellSessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ShellSession> {
        self.inner.lock().expect("shell session lock poisoned")
    }

    pub fn push_command(&self, text: &str) {
        self.lock().push_command(text);
    }

    pub fn push_result(&self, text: &str) {
        self.lock().push_result(text);
    }

    pub fn push_error(&self, text: &str) {
        self.lock().push_error(text);
    }

    /// Read-only copy of the transcript.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn recall_previous(&self) -> Option<String> {
        self.lock().recall_previous()
    }

    pub fn recall_next(&self) -> Option<String> {
        self.lock().recall_next()
    }
}
