//! Locomotion-driven noise cadence.

use st_core::{EntityId, Locomotion, Vec2};
use st_events::NoiseEvent;

/// The (interval, radius) pairs for the two audible locomotion states.
///
/// Sneaking has no pair on purpose — it is silent by definition, not by a
/// zero radius.
#[derive(Copy, Clone, Debug)]
pub struct NoiseProfile {
    /// Seconds between footstep events while walking.
    pub walk_interval_secs: f32,
    /// Seconds between footstep events while running.
    pub run_interval_secs: f32,
    /// Propagation radius of a walking footstep (world units).
    pub walk_radius: f32,
    /// Propagation radius of a running footstep (world units).
    pub run_radius: f32,
}

impl NoiseProfile {
    /// Emission interval for `locomotion`, or `None` for the silent state.
    pub fn interval_secs(&self, locomotion: Locomotion) -> Option<f32> {
        match locomotion {
            Locomotion::Sneaking => None,
            Locomotion::Walking  => Some(self.walk_interval_secs),
            Locomotion::Running  => Some(self.run_interval_secs),
        }
    }

    /// Event radius for `locomotion`, or `None` for the silent state.
    pub fn radius(&self, locomotion: Locomotion) -> Option<f32> {
        match locomotion {
            Locomotion::Sneaking => None,
            Locomotion::Walking  => Some(self.walk_radius),
            Locomotion::Running  => Some(self.run_radius),
        }
    }
}

impl Default for NoiseProfile {
    fn default() -> Self {
        Self {
            walk_interval_secs: 0.6,
            run_interval_secs:  0.25,
            walk_radius:        100.0,
            run_radius:         250.0,
        }
    }
}

/// The footstep scheduler.
///
/// # Cadence rules
///
/// - While moving in an audible state, elapsed time accumulates; reaching
///   the active state's interval produces one event and restarts the cycle.
/// - A locomotion change mid-cycle swaps the interval the accumulator is
///   compared against without discarding progress — walking 0.5 s into a
///   0.6 s cycle and breaking into a run (0.25 s) fires on the next tick,
///   not 0.25 s later.
/// - Stopping, or switching to Sneaking, cancels the cycle outright: no
///   trailing event, and the next movement re-arms from zero.
#[derive(Clone, Debug, Default)]
pub struct NoiseEmitter {
    profile: NoiseProfile,
    /// Accumulated seconds within the current cycle; `None` while disarmed.
    elapsed: Option<f32>,
}

impl NoiseEmitter {
    pub fn new(profile: NoiseProfile) -> Self {
        Self {
            profile,
            elapsed: None,
        }
    }

    pub fn profile(&self) -> &NoiseProfile {
        &self.profile
    }

    /// `true` while a noise cycle is in progress.
    pub fn is_armed(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Advance the cadence by one tick.
    ///
    /// Returns the event to publish, if the cycle completed this tick.  The
    /// caller owns publication; the emitter only schedules.
    pub fn update(
        &mut self,
        locomotion: Locomotion,
        moving:     bool,
        position:   Vec2,
        source:     EntityId,
        dt:         f32,
    ) -> Option<NoiseEvent> {
        if locomotion.is_silent() || !moving {
            self.elapsed = None;
            return None;
        }

        // Audible states always have an interval and radius.
        let interval = self.profile.interval_secs(locomotion)?;

        let elapsed = self.elapsed.get_or_insert(0.0);
        *elapsed += dt;
        if *elapsed < interval {
            return None;
        }

        *elapsed = 0.0;
        let radius = self.profile.radius(locomotion)?;
        Some(NoiseEvent::new(position, radius, Some(source)))
    }
}
