//! Patrol routes.

use st_core::Vec2;

/// An ordered sequence of patrol waypoints, owned by one agent and immutable
/// after load.  The traversal position lives in
/// [`BehaviorState::patrol_index`][crate::BehaviorState] — the route itself
/// is shared, read-only data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
    looping:   bool,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>, looping: bool) -> Self {
        Self { waypoints, looping }
    }

    /// A route with no waypoints — the agent it belongs to spawns straight
    /// into Alert.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Waypoint at `index`.
    ///
    /// # Panics
    /// Panics if the route is empty or `index` is out of bounds; callers
    /// gate on [`is_empty`][Self::is_empty] first (the machine never indexes
    /// an empty route).
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec2 {
        self.waypoints[index]
    }

    /// The index after `index`: wraps for looping routes, clamps at the
    /// final waypoint otherwise.
    pub fn advance(&self, index: usize) -> usize {
        debug_assert!(!self.is_empty());
        if self.looping {
            (index + 1) % self.waypoints.len()
        } else {
            (index + 1).min(self.waypoints.len() - 1)
        }
    }
}
