//! The player body: input-driven movement plus the noise emitter.

use st_core::{EntityId, Locomotion, Vec2};
use st_events::NoiseEvent;

use crate::{NoiseEmitter, NoiseProfile};

/// Movement speed per locomotion state (units/sec).
#[derive(Copy, Clone, Debug)]
pub struct PlayerSpeeds {
    pub sneak: f32,
    pub walk:  f32,
    pub run:   f32,
}

impl PlayerSpeeds {
    /// Speed for `locomotion`.
    #[inline]
    pub fn for_state(&self, locomotion: Locomotion) -> f32 {
        match locomotion {
            Locomotion::Sneaking => self.sneak,
            Locomotion::Walking  => self.walk,
            Locomotion::Running  => self.run,
        }
    }
}

impl Default for PlayerSpeeds {
    fn default() -> Self {
        Self {
            sneak: 70.0,
            walk:  130.0,
            run:   220.0,
        }
    }
}

/// One tick of player input.  Whoever produces it — a scenario script, a
/// replay file, a live input layer — is outside this core.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlayerInput {
    /// Desired movement direction.  Normalized before use; `Vec2::ZERO`
    /// means "stand still".
    pub direction: Vec2,

    /// Locomotion state for this tick.
    pub locomotion: Locomotion,
}

/// The player body.
#[derive(Clone, Debug)]
pub struct Player {
    /// The player's perceivable identity — the noise source tag, and the
    /// entity agents chase.
    pub entity: EntityId,

    pub position: Vec2,

    /// Last movement direction (unit vector); unchanged while standing.
    pub facing: Vec2,

    /// Locomotion state as of the last [`step`][Self::step].
    pub locomotion: Locomotion,

    speeds:  PlayerSpeeds,
    emitter: NoiseEmitter,
}

impl Player {
    pub fn new(entity: EntityId, position: Vec2) -> Self {
        Self::with_tuning(entity, position, PlayerSpeeds::default(), NoiseProfile::default())
    }

    pub fn with_tuning(
        entity:   EntityId,
        position: Vec2,
        speeds:   PlayerSpeeds,
        profile:  NoiseProfile,
    ) -> Self {
        Self {
            entity,
            position,
            facing: Vec2::new(1.0, 0.0),
            locomotion: Locomotion::default(),
            speeds,
            emitter: NoiseEmitter::new(profile),
        }
    }

    pub fn speeds(&self) -> &PlayerSpeeds {
        &self.speeds
    }

    /// Integrate one tick of movement and advance the noise cadence.
    ///
    /// Returns the noise event this tick produced, if any, for the caller
    /// to publish.
    pub fn step(&mut self, input: &PlayerInput, dt: f32) -> Option<NoiseEvent> {
        self.locomotion = input.locomotion;

        let dir = input.direction.normalized();
        let moving = dir != Vec2::ZERO;
        if moving {
            self.position += dir * (self.speeds.for_state(self.locomotion) * dt);
            self.facing = dir;
        }

        self.emitter
            .update(self.locomotion, moving, self.position, self.entity, dt)
    }
}
