//! Pathfinding seam and the straight-line default implementation.
//!
//! # Contract
//!
//! The behavior core drives navigation through three calls, every tick while
//! an agent has somewhere to be:
//!
//! 1. [`set_target`][Pathfinder::set_target] — (re)aim the agent's path.
//! 2. [`next_waypoint`][Pathfinder::next_waypoint] — the point to move
//!    toward this tick, or `None` when no route is available *this tick*
//!    (the caller stays put and retries next tick; this is not an error).
//! 3. [`is_complete`][Pathfinder::is_complete] — whether the agent has
//!    arrived at its target.
//!
//! The actual routing algorithm is out of scope here; anything from a
//! navmesh to a grid A* can sit behind the trait.

use std::collections::HashMap;

use st_core::{AgentId, Vec2};

/// Default arrival tolerance in world units.
///
/// A frame of fast movement covers a few units, so a handful of units of
/// slack guarantees arrival detection regardless of step quantization.
pub const DEFAULT_ARRIVE_RADIUS: f32 = 4.0;

/// Pluggable per-agent navigation.
///
/// One `Pathfinder` instance serves every agent, keyed by [`AgentId`]; the
/// behavior core never constructs paths itself.
pub trait Pathfinder {
    /// Aim `agent` at `target`, replacing any previous target.
    fn set_target(&mut self, agent: AgentId, target: Vec2);

    /// The next point `agent` should move toward from `from`, or `None`
    /// when the pathfinder has no target or no route for this tick.
    fn next_waypoint(&self, agent: AgentId, from: Vec2) -> Option<Vec2>;

    /// `true` once `agent` (at `from`) has reached its current target, or
    /// when it has no target at all.
    fn is_complete(&self, agent: AgentId, from: Vec2) -> bool;

    /// Drop `agent`'s target and any cached route (agent despawn, state
    /// change that abandons the destination).
    fn clear(&mut self, agent: AgentId);
}

/// Straight-line navigation: the next waypoint is always the target itself.
///
/// Suitable for open maps and for tests; swap in a real router for levels
/// where walls must be steered around (the behavior core is agnostic).
pub struct DirectPathfinder {
    targets:       HashMap<AgentId, Vec2>,
    arrive_radius: f32,
}

impl DirectPathfinder {
    pub fn new() -> Self {
        Self::with_arrive_radius(DEFAULT_ARRIVE_RADIUS)
    }

    /// Override the arrival tolerance (world units).
    pub fn with_arrive_radius(arrive_radius: f32) -> Self {
        Self {
            targets: HashMap::new(),
            arrive_radius,
        }
    }

    /// Current target for `agent`, if any.
    pub fn target(&self, agent: AgentId) -> Option<Vec2> {
        self.targets.get(&agent).copied()
    }
}

impl Default for DirectPathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder for DirectPathfinder {
    fn set_target(&mut self, agent: AgentId, target: Vec2) {
        self.targets.insert(agent, target);
    }

    fn next_waypoint(&self, agent: AgentId, _from: Vec2) -> Option<Vec2> {
        self.targets.get(&agent).copied()
    }

    fn is_complete(&self, agent: AgentId, from: Vec2) -> bool {
        match self.targets.get(&agent) {
            Some(&target) => from.distance(target) <= self.arrive_radius,
            None          => true,
        }
    }

    fn clear(&mut self, agent: AgentId) {
        self.targets.remove(&agent);
    }
}
