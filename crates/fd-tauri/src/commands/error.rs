/// Centralized error mapping for commands.
///
/// Commands return `Result<_, String>` so the frontend sees the same
/// message the backend logged; this is the single place to change if
/// commands ever grow structured error codes.
pub fn map_err<E: std::fmt::Display>(err: E) -> String {
    err.to_string()
}
