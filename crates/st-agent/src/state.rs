//! The per-agent mutable behavior record.

use st_core::{EntityId, Vec2};

use crate::AgentMode;

/// Everything the state machine remembers about one agent between ticks.
///
/// Mutated exclusively by the owning agent's per-tick update and by inbound
/// noise/sensor events (see [`fsm`][crate::fsm]); no other agent ever reads
/// or writes it.  Created at spawn, dropped at despawn — never persisted.
///
/// # Invariants
///
/// - `mode` is always exactly one of the three [`AgentMode`]s.
/// - `patrol_index` is meaningful only while the agent's route is non-empty.
/// - `last_known` is `Some` exactly when a confirmed candidate position has
///   been recorded — the `Option` *is* the validity flag.
/// - `alert_timer >= 0`, and it is reset to the full duration exactly at
///   Alert entry (and on Alert re-trigger).
/// - `tracked` never owns the candidate: it is an identity compared against
///   liveness information each tick, never dereferenced once stale.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorState {
    /// Current behavioral mode.
    pub mode: AgentMode,

    /// Next route waypoint to visit.  Meaningless for empty routes.
    pub patrol_index: usize,

    /// The point an Alert-mode agent moves toward while searching.
    pub investigate_point: Vec2,

    /// Most recent confirmed candidate position, if any was ever recorded.
    pub last_known: Option<Vec2>,

    /// Remaining Alert countdown in seconds.  0 when expired or cancelled.
    pub alert_timer: f32,

    /// The candidate currently being chased, by identity.
    pub tracked: Option<EntityId>,
}

impl BehaviorState {
    /// A blank record.  [`spawn`][Self::spawn] is the real entry point — it
    /// seeds the initial mode from the route; this exists for tests that
    /// want to start from a hand-built state.
    pub fn blank() -> Self {
        Self {
            mode:              AgentMode::Patrol,
            patrol_index:      0,
            investigate_point: Vec2::ZERO,
            last_known:        None,
            alert_timer:       0.0,
            tracked:           None,
        }
    }

    /// `true` while the alert countdown is running.
    #[inline]
    pub fn alert_timer_running(&self) -> bool {
        self.alert_timer > 0.0
    }
}
