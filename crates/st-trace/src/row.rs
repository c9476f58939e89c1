//! Plain data row types written by trace backends.

/// One behavior transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub from:     &'static str,
    pub to:       &'static str,
    pub cause:    &'static str,
}

/// One living agent's position and mode at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub x:        f32,
    pub y:        f32,
    pub mode:     &'static str,
}
