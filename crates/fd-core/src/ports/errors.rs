use thiserror::Error;

/// Failure reported by a device command backend.
///
/// The message is passed through to the presentation layer verbatim; nothing
/// upstream parses it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("binary '{name}' not found for platform '{platform}'")]
    ToolNotFound { name: String, platform: String },

    #[error("{0}")]
    CommandFailed(String),
}
