//! Behavior modes and transition records.

/// The three behavioral modes every agent is always in exactly one of.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AgentMode {
    /// Walking the patrol route (or halted on it, for non-looping routes).
    #[default]
    Patrol,
    /// Investigating a point — a noise origin, a glimpsed candidate, or a
    /// lost target's fallback position.
    Alert,
    /// Actively pursuing a tracked candidate.
    Chase,
}

impl AgentMode {
    /// Human-readable label, useful for trace column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentMode::Patrol => "patrol",
            AgentMode::Alert  => "alert",
            AgentMode::Chase  => "chase",
        }
    }
}

impl std::fmt::Display for AgentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a transition fired.  Carried to observers and trace output; never
/// consulted by the machine itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TransitionCause {
    /// Initial mode seeding at agent spawn.
    Spawn,
    /// Patrol was requested but no route is available.
    NoRoute,
    /// An in-radius noise event from another source.
    Noise,
    /// A candidate passed the acquisition visibility test.
    CandidateSeen,
    /// A candidate entered the detection volume without passing the test.
    CandidateNearby,
    /// The tracked candidate was lost — despawn, sensor exit, or a failed
    /// retention test.
    CandidateLost,
    /// The alert countdown reached zero.
    AlertExpired,
}

impl TransitionCause {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionCause::Spawn           => "spawn",
            TransitionCause::NoRoute         => "no_route",
            TransitionCause::Noise           => "noise",
            TransitionCause::CandidateSeen   => "candidate_seen",
            TransitionCause::CandidateNearby => "candidate_nearby",
            TransitionCause::CandidateLost   => "candidate_lost",
            TransitionCause::AlertExpired    => "alert_expired",
        }
    }
}

impl std::fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mode change (or re-trigger: `from == to` is legal — a fresh noise
/// restarting an Alert reports `Alert → Alert`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from:  AgentMode,
    pub to:    AgentMode,
    pub cause: TransitionCause,
}
