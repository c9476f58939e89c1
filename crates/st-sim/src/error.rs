//! Construction-time errors.
//!
//! Nothing in the running tick loop returns a `Result` — runtime failures
//! (no waypoint, empty route, stale candidate) degrade per the behavior
//! rules.  Errors exist only where a simulation is assembled from
//! inconsistent inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A `SimConfig` value that cannot drive a tick loop (zero or negative
    /// tick duration).
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A per-agent input collection whose length disagrees with the spawn
    /// list.
    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
