//! The table of perceivable bodies.

use st_core::{EntityId, Vec2};

/// One perceivable body.
#[derive(Clone, Debug)]
struct EntityRecord {
    position:  Vec2,
    /// Capability tag: is this body a valid chase candidate?  Classification
    /// lives here, on the data, so sensors and the machine never inspect
    /// types.
    candidate: bool,
    alive:     bool,
}

/// All perceivable bodies in the simulation: the player, each agent's own
/// body (so noise self-filtering works by identity), and any props a
/// scenario registers.
///
/// IDs are assigned sequentially at spawn and never reused; a despawned
/// entity keeps its row with `alive = false`, which makes every lookup a
/// liveness check.
#[derive(Default)]
pub struct EntityTable {
    records: Vec<EntityRecord>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new body and return its identity.
    pub fn spawn(&mut self, position: Vec2, candidate: bool) -> EntityId {
        let id = EntityId(self.records.len() as u32);
        self.records.push(EntityRecord {
            position,
            candidate,
            alive: true,
        });
        id
    }

    /// Mark `entity` as gone.  Its position is no longer observable; sensors
    /// report the disappearance as an exit edge on their next update.
    pub fn despawn(&mut self, entity: EntityId) {
        if let Some(record) = self.records.get_mut(entity.index()) {
            record.alive = false;
        }
    }

    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.records
            .get(entity.index())
            .map(|r| r.alive)
            .unwrap_or(false)
    }

    /// Move a living body.  Ignored for despawned or unknown entities.
    pub fn set_position(&mut self, entity: EntityId, position: Vec2) {
        if let Some(record) = self.records.get_mut(entity.index()) {
            if record.alive {
                record.position = position;
            }
        }
    }

    /// Current position of a *living* body — `None` once despawned, so a
    /// stale reference can never be dereferenced into a position.
    pub fn position(&self, entity: EntityId) -> Option<Vec2> {
        self.records
            .get(entity.index())
            .filter(|r| r.alive)
            .map(|r| r.position)
    }

    /// All living candidate-tagged bodies, in ascending `EntityId` order.
    /// This is the proximity sensors' feed.
    pub fn candidates(&self) -> impl Iterator<Item = (EntityId, Vec2)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.alive && r.candidate)
            .map(|(i, r)| (EntityId(i as u32), r.position))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
