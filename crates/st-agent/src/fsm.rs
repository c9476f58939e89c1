//! The behavior state machine: spawn seeding, event handlers, and the
//! per-tick update.
//!
//! # Shape
//!
//! All machine logic lives in `impl BehaviorState` methods that return a
//! [`Step`]: the intents to apply (aim the pathfinder, follow the path) and
//! the transition that fired, if any.  The machine reads its collaborators —
//! pathfinder completion, line of sight — but never mutates them; the
//! simulation loop owns all writes.  The split mirrors the intent/apply
//! phases of the tick loop and keeps every transition testable in isolation.
//!
//! # Handler inventory
//!
//! | Entry point                      | Triggered by                         |
//! |----------------------------------|--------------------------------------|
//! | [`BehaviorState::spawn`]         | agent creation                       |
//! | [`BehaviorState::handle_noise`]  | noise bus delivery                   |
//! | [`BehaviorState::handle_sensor_event`] | proximity enter/exit edges     |
//! | [`BehaviorState::tick`]          | the per-tick behavior phase          |

use st_core::{AgentId, EntityId, Vec2};
use st_events::NoiseEvent;
use st_world::{LineOfSight, Pathfinder, SensorEvent};

use crate::{
    AgentConfig, AgentMode, BehaviorState, LostTargetPolicy, PatrolRoute, Transition,
    TransitionCause,
};

// ── Intents ───────────────────────────────────────────────────────────────────

/// An action the machine wants applied to the world this tick.
///
/// Produced by the handlers below, consumed by the simulation loop.  Order
/// within a [`Step`] matters: a `SetPath` always precedes the `Follow` that
/// walks it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Aim the agent's pathfinder at a new target.
    SetPath(Vec2),

    /// Advance along the current path at `speed` (units/sec) for one tick.
    /// If the pathfinder has no waypoint this tick, the agent stands still
    /// and retries next tick — that outcome needs no intent of its own.
    Follow { speed: f32 },
}

/// The outcome of one handler invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub intents:    Vec<Intent>,
    pub transition: Option<Transition>,
}

impl Step {
    /// Nothing to do — no movement, no transition.
    pub fn none() -> Self {
        Self::default()
    }
}

// ── Tick context ──────────────────────────────────────────────────────────────

/// Read-only view of the world handed to [`BehaviorState::tick`].
///
/// Assembled fresh by the simulation loop for each agent each tick; the
/// machine receives its collaborators here rather than reaching for them
/// globally, so a test can drive a full Chase with nothing but a
/// `DirectPathfinder` and an `OpenField`.
pub struct TickCtx<'a, P: Pathfinder + ?Sized, L: LineOfSight + ?Sized> {
    pub agent: AgentId,

    /// The agent's current world position.
    pub position: Vec2,

    /// The agent's current facing (unit vector).
    pub facing: Vec2,

    /// Live position of the tracked candidate, or `None` when the candidate
    /// is despawned or otherwise stale.  The machine never dereferences the
    /// tracked identity itself — this field *is* the liveness check.
    pub tracked_position: Option<Vec2>,

    pub paths: &'a P,
    pub los:   &'a L,

    /// Elapsed simulated seconds this tick.
    pub dt: f32,
}

// ── The machine ───────────────────────────────────────────────────────────────

impl BehaviorState {
    /// Seed a fresh agent: Patrol when a route exists, Alert at the spawn
    /// point otherwise.
    pub fn spawn(route: &PatrolRoute, cfg: &AgentConfig, spawn_point: Vec2) -> (Self, Step) {
        let mut state = Self::blank();
        let step = if route.is_empty() {
            state.enter_alert(spawn_point, cfg, TransitionCause::Spawn)
        } else {
            state.enter_patrol(route, TransitionCause::Spawn)
        };
        (state, step)
    }

    /// React to a delivered noise event.
    ///
    /// Ignored while chasing, for the agent's own noise, and for noise whose
    /// radius does not reach the agent.  Otherwise: Alert at the origin with
    /// a full timer — most recent noise wins, and a duplicate event in the
    /// same tick just re-arms the same Alert.
    pub fn handle_noise(
        &mut self,
        cfg:         &AgentConfig,
        self_entity: EntityId,
        position:    Vec2,
        event:       &NoiseEvent,
    ) -> Step {
        if self.mode == AgentMode::Chase {
            return Step::none();
        }
        if event.source == Some(self_entity) {
            return Step::none();
        }
        if !event.reaches(position) {
            return Step::none();
        }
        self.enter_alert(event.origin, cfg, TransitionCause::Noise)
    }

    /// React to a proximity sensor edge.
    ///
    /// Enter: snap facing toward the candidate and run the acquisition test —
    /// Chase on success, Alert at the candidate's position (remembered as a
    /// pending last-known) on failure.  Enters are ignored while already
    /// chasing.
    ///
    /// Exit: if the departing entity is the tracked candidate, fall back
    /// exactly as a failed retention would.
    ///
    /// `entity_position` is the candidate's position at the time of the
    /// edge; `None` (already gone) downgrades an enter to a no-op.
    pub fn handle_sensor_event<L>(
        &mut self,
        cfg:             &AgentConfig,
        route:           &PatrolRoute,
        los:             &L,
        position:        Vec2,
        facing:          &mut Vec2,
        event:           SensorEvent,
        entity_position: Option<Vec2>,
    ) -> Step
    where
        L: LineOfSight + ?Sized,
    {
        match event {
            SensorEvent::Entered(entity) => {
                if self.mode == AgentMode::Chase {
                    return Step::none();
                }
                let Some(candidate) = entity_position else {
                    return Step::none();
                };

                // The agent snaps around toward whatever tripped the sensor.
                let look = (candidate - position).normalized();
                if look != Vec2::ZERO {
                    *facing = look;
                }

                if cfg.perception().acquire(los, position, candidate) {
                    self.enter_chase(entity, candidate)
                } else {
                    self.last_known = Some(candidate);
                    self.enter_alert(candidate, cfg, TransitionCause::CandidateNearby)
                }
            }

            SensorEvent::Exited(entity) => {
                if self.tracked == Some(entity) {
                    self.lose_target(cfg, route, position, TransitionCause::CandidateLost)
                } else {
                    Step::none()
                }
            }
        }
    }

    /// The per-tick update for the current mode.
    pub fn tick<P, L>(
        &mut self,
        cfg:   &AgentConfig,
        route: &PatrolRoute,
        ctx:   &TickCtx<'_, P, L>,
    ) -> Step
    where
        P: Pathfinder + ?Sized,
        L: LineOfSight + ?Sized,
    {
        match self.mode {
            AgentMode::Patrol => self.tick_patrol(cfg, route, ctx),
            AgentMode::Alert  => self.tick_alert(cfg, route, ctx),
            AgentMode::Chase  => self.tick_chase(cfg, route, ctx),
        }
    }

    // ── Per-mode ticks ────────────────────────────────────────────────────

    fn tick_patrol<P, L>(
        &mut self,
        cfg:   &AgentConfig,
        route: &PatrolRoute,
        ctx:   &TickCtx<'_, P, L>,
    ) -> Step
    where
        P: Pathfinder + ?Sized,
        L: LineOfSight + ?Sized,
    {
        if route.is_empty() {
            // Patrol without a route degrades to searching where we stand.
            return self.enter_alert(ctx.position, cfg, TransitionCause::NoRoute);
        }

        let mut intents = Vec::new();
        if ctx.paths.is_complete(ctx.agent, ctx.position) {
            let next = route.advance(self.patrol_index);
            if next == self.patrol_index {
                // Non-looping route exhausted: halt at the final waypoint.
                return Step::none();
            }
            self.patrol_index = next;
            intents.push(Intent::SetPath(route.waypoint(next)));
        }
        intents.push(Intent::Follow { speed: cfg.patrol_speed });
        Step { intents, transition: None }
    }

    fn tick_alert<P, L>(
        &mut self,
        cfg:   &AgentConfig,
        route: &PatrolRoute,
        ctx:   &TickCtx<'_, P, L>,
    ) -> Step
    where
        P: Pathfinder + ?Sized,
        L: LineOfSight + ?Sized,
    {
        let was_running = self.alert_timer_running();
        self.alert_timer = (self.alert_timer - ctx.dt).max(0.0);

        if was_running && !self.alert_timer_running() {
            // Countdown just elapsed.
            if !route.is_empty() {
                return self.enter_patrol(route, TransitionCause::AlertExpired);
            }
            // No route to resume: remain Alert (stationary once arrived).
        }

        let mut intents = Vec::new();
        if !ctx.paths.is_complete(ctx.agent, ctx.position) {
            intents.push(Intent::Follow { speed: cfg.patrol_speed });
        } else if !self.alert_timer_running() {
            // Arrived with an expired countdown: arm it.
            self.alert_timer = cfg.alert_duration_secs;
        }
        Step { intents, transition: None }
    }

    fn tick_chase<P, L>(
        &mut self,
        cfg:   &AgentConfig,
        route: &PatrolRoute,
        ctx:   &TickCtx<'_, P, L>,
    ) -> Step
    where
        P: Pathfinder + ?Sized,
        L: LineOfSight + ?Sized,
    {
        // Liveness first: a stale reference is never perceived against.
        let Some(candidate) = ctx.tracked_position else {
            return self.lose_target(cfg, route, ctx.position, TransitionCause::CandidateLost);
        };

        let seen = cfg
            .perception()
            .observe(ctx.los, ctx.position, ctx.facing, candidate);
        if !seen.visible {
            return self.lose_target(cfg, route, ctx.position, TransitionCause::CandidateLost);
        }

        self.last_known = Some(seen.position);
        Step {
            intents: vec![
                Intent::SetPath(seen.position),
                Intent::Follow { speed: cfg.chase_speed },
            ],
            transition: None,
        }
    }

    // ── Transition helpers ────────────────────────────────────────────────

    /// Enter Patrol, resuming the route at the next unvisited waypoint.
    /// Callers guarantee the route is non-empty.
    fn enter_patrol(&mut self, route: &PatrolRoute, cause: TransitionCause) -> Step {
        debug_assert!(!route.is_empty());
        let from = self.mode;
        self.mode = AgentMode::Patrol;
        self.tracked = None;
        self.alert_timer = 0.0;
        Step {
            intents: vec![Intent::SetPath(route.waypoint(self.patrol_index))],
            transition: Some(Transition {
                from,
                to: AgentMode::Patrol,
                cause,
            }),
        }
    }

    /// Enter (or re-trigger) Alert toward `point` with a full timer.
    fn enter_alert(&mut self, point: Vec2, cfg: &AgentConfig, cause: TransitionCause) -> Step {
        let from = self.mode;
        self.mode = AgentMode::Alert;
        self.tracked = None;
        self.investigate_point = point;
        self.alert_timer = cfg.alert_duration_secs;
        Step {
            intents: vec![Intent::SetPath(point)],
            transition: Some(Transition {
                from,
                to: AgentMode::Alert,
                cause,
            }),
        }
    }

    /// Enter Chase on `entity`, last seen at `candidate`.
    fn enter_chase(&mut self, entity: EntityId, candidate: Vec2) -> Step {
        let from = self.mode;
        self.mode = AgentMode::Chase;
        self.tracked = Some(entity);
        self.last_known = Some(candidate);
        self.alert_timer = 0.0;
        Step {
            intents: vec![Intent::SetPath(candidate)],
            transition: Some(Transition {
                from,
                to: AgentMode::Chase,
                cause: TransitionCause::CandidateSeen,
            }),
        }
    }

    /// Shared fallback for every way a chased target can be lost.
    fn lose_target(
        &mut self,
        cfg:      &AgentConfig,
        route:    &PatrolRoute,
        position: Vec2,
        cause:    TransitionCause,
    ) -> Step {
        self.tracked = None;

        let fallback = match cfg.lost_target_policy {
            LostTargetPolicy::LastKnown       => self.last_known,
            LostTargetPolicy::CurrentPosition => Some(position),
        };

        match fallback {
            Some(point) => self.enter_alert(point, cfg, cause),
            // No position was ever confirmed (possible only outside the
            // normal flow): resume the route if there is one, otherwise hold
            // a stationary Alert where we stand.
            None if !route.is_empty() => self.enter_patrol(route, cause),
            None => self.enter_alert(position, cfg, cause),
        }
    }
}
