//! The noise event value type.

use st_core::{EntityId, Vec2};

/// A burst of noise at a world position.
///
/// Created by an emitter, delivered to every subscribed listener within the
/// same tick, and then discarded — noise is never persisted or replayed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseEvent {
    /// World position the noise originated from.
    pub origin: Vec2,

    /// Propagation radius in world units.  Always >= 0; a zero radius is a
    /// legal event that nobody can hear.
    pub radius: f32,

    /// Identity of the body that made the noise, if known.  Listeners use
    /// this to ignore their own footsteps; `None` means an anonymous source
    /// (a collapsing prop, a thrown object).
    pub source: Option<EntityId>,
}

impl NoiseEvent {
    /// Construct an event, clamping a (buggy) negative radius to silence.
    pub fn new(origin: Vec2, radius: f32, source: Option<EntityId>) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            source,
        }
    }

    /// `true` if `point` lies within the propagation radius.
    #[inline]
    pub fn reaches(&self, point: Vec2) -> bool {
        self.origin.distance(point) <= self.radius
    }
}
