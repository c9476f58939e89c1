use thiserror::Error;

/// Errors from patrol-route loading.
///
/// Behavioral failures (empty routes, unreachable waypoints) are not errors
/// anywhere in this crate — they degrade per the machine's rules.  This enum
/// covers only the data path: reading and parsing route files.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("route parse error: {0}")]
    Parse(String),
}
