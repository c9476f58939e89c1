//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `StError` via `From` impls, or keep them separate and wrap `StError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.
//!
//! Note that graceful-degradation outcomes (empty patrol route, no waypoint
//! this tick) are NOT errors anywhere in this workspace — they are absorbed
//! locally and surface only as observable agent behavior.

use thiserror::Error;

use crate::{AgentId, EntityId};

/// The top-level error type for `st-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum StError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `st-*` crates.
pub type StResult<T> = Result<T, StError>;
