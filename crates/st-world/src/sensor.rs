//! Circular proximity detection volume with enter/exit edge events.

use std::collections::BTreeSet;

use st_core::{EntityId, Vec2};

/// An edge event from a [`ProximitySensor`] update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SensorEvent {
    /// The entity crossed into the detection volume this tick.
    Entered(EntityId),
    /// The entity left the volume this tick — by moving out or by
    /// disappearing from the candidate feed entirely (despawn).
    Exited(EntityId),
}

/// A bounded circular detection volume attached to one agent.
///
/// The sensor is fed the current positions of *classification-approved*
/// candidates each tick — deciding what counts as a chase candidate is the
/// feeder's responsibility, expressed by what it puts in the iterator, not
/// by the sensor inspecting types.  The sensor diffs membership against the
/// previous tick and reports the edges.
///
/// An entity absent from the feed is treated exactly like one that walked
/// out: a despawned candidate surfaces as [`SensorEvent::Exited`], which is
/// how the behavior core learns a tracked reference went stale without ever
/// dereferencing it.
#[derive(Clone, Debug)]
pub struct ProximitySensor {
    radius: f32,
    inside: BTreeSet<EntityId>,
}

impl ProximitySensor {
    /// Create a sensor with the given detection radius (world units).
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            inside: BTreeSet::new(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// `true` if `entity` was inside the volume as of the last update.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.inside.contains(&entity)
    }

    /// Diff the volume membership against `candidates` and return the edge
    /// events, exits first, each group in ascending `EntityId` order so a
    /// tick's events are deterministic.
    pub fn update<I>(&mut self, origin: Vec2, candidates: I) -> Vec<SensorEvent>
    where
        I: IntoIterator<Item = (EntityId, Vec2)>,
    {
        let now: BTreeSet<EntityId> = candidates
            .into_iter()
            .filter(|&(_, pos)| origin.distance(pos) <= self.radius)
            .map(|(id, _)| id)
            .collect();

        let mut events = Vec::new();
        for &gone in self.inside.difference(&now) {
            events.push(SensorEvent::Exited(gone));
        }
        for &new in now.difference(&self.inside) {
            events.push(SensorEvent::Entered(new));
        }

        self.inside = now;
        events
    }
}
