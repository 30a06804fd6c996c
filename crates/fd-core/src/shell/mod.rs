//! Shell session state: transcript entries and command recall.

mod history;
mod session;

pub use history::{HistoryEntry, HistoryEntryKind};
pub use session::ShellSession;
