//! The `Sim` struct and its tick loop.

use st_agent::{AgentMode, Intent, Step, TickCtx};
use st_core::{AgentId, SimClock, SimConfig, Tick, Vec2};
use st_events::{NoiseBus, NoiseEvent};
use st_player::{Player, PlayerInput};
use st_world::{LineOfSight, Pathfinder, SensorEvent};

use crate::{AgentRoster, EntityTable, SimObserver};

/// The main simulation runner.
///
/// `Sim<P, L>` holds all simulation state and drives the phase-ordered tick
/// loop:
///
/// 1. **Player phase**: integrate player movement from the tick's input,
///    advance the noise cadence, and deliver any resulting event through
///    the bus — synchronously, to every subscribed agent, before the phase
///    ends.
/// 2. **Sensor phase**: update each agent's proximity sensor against the
///    living candidate entities; feed enter/exit edges to the vision
///    handlers.
/// 3. **Behavior phase**: per-tick state machine update per agent; intents
///    (path aiming, movement) are applied as they are produced.
/// 4. **Clock advance.**
///
/// Phases 2 and 3 iterate in ascending `AgentId` order, so a run is fully
/// deterministic given the same inputs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder, L: LineOfSight> {
    /// Global configuration (total ticks, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// The player body and noise emitter.
    pub player: Player,

    /// The noise channel.  Subscriptions mirror the set of living agents.
    pub bus: NoiseBus,

    /// The navigation seam, shared by all agents and keyed by `AgentId`.
    pub paths: P,

    /// The occlusion seam.
    pub los: L,

    /// Per-agent state arrays.
    pub roster: AgentRoster,

    /// Perceivable bodies: player, agent bodies, scenario props.
    pub table: EntityTable,
}

impl<P: Pathfinder, L: LineOfSight> Sim<P, L> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation to `config.end_tick()` with a stationary player.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        self.run_with(|_| PlayerInput::default(), observer);
    }

    /// Run to `config.end_tick()`, asking `inputs` for the player's input
    /// each tick.
    pub fn run_with<F, O>(&mut self, mut inputs: F, observer: &mut O)
    where
        F: FnMut(Tick) -> PlayerInput,
        O: SimObserver,
    {
        while self.clock.current_tick < self.config.end_tick() {
            let input = inputs(self.clock.current_tick);
            self.step(&input, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks with a stationary player (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(&PlayerInput::default(), observer);
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the number of behavior transitions that fired.
    pub fn step<O: SimObserver>(&mut self, input: &PlayerInput, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        let dt = self.clock.tick_duration_secs;

        observer.on_tick_start(now);
        let mut transitions = 0;

        // ── Phase 1: player ───────────────────────────────────────────────
        if self.table.is_alive(self.player.entity) {
            let emitted = self.player.step(input, dt);
            self.table.set_position(self.player.entity, self.player.position);
            if let Some(event) = emitted {
                transitions += self.deliver_noise(now, dt, &event, observer);
            }
        }

        // ── Phase 2: proximity sensors ────────────────────────────────────
        transitions += self.sensor_phase(now, dt, observer);

        // ── Phase 3: behavior ─────────────────────────────────────────────
        transitions += self.behavior_phase(now, dt, observer);

        // ── Snapshot + bookkeeping ────────────────────────────────────────
        if self.config.snapshot_interval_ticks > 0
            && now.0 % self.config.snapshot_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.roster);
        }
        observer.on_tick_end(now, transitions);

        self.clock.advance();
        transitions
    }

    /// Publish a scenario-driven noise event (a collapsing prop, a thrown
    /// object) through the same delivery path as player footsteps.
    pub fn emit_noise<O: SimObserver>(&mut self, event: NoiseEvent, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        let dt = self.clock.tick_duration_secs;
        self.deliver_noise(now, dt, &event, observer)
    }

    /// Remove the player from the simulation.  Sensors report the
    /// disappearance as exit edges on their next update; chasing agents
    /// fall back per the machine's lost-target rules.
    pub fn despawn_player(&mut self) {
        self.table.despawn(self.player.entity);
    }

    /// Remove one agent: its slot goes dead, its bus subscription and path
    /// state are discarded, and its body stops being perceivable.  Pending
    /// timers die with the state — there is nothing to cancel across agents.
    pub fn despawn_agent(&mut self, agent: AgentId) {
        let i = agent.index();
        if i >= self.roster.count || !self.roster.alive[i] {
            return;
        }
        self.roster.alive[i] = false;
        self.bus.unsubscribe(agent);
        self.paths.clear(agent);
        self.table.despawn(self.roster.entities[i]);
    }

    /// `true` while the player is part of the simulation.
    pub fn player_alive(&self) -> bool {
        self.table.is_alive(self.player.entity)
    }

    // ── Phase internals ───────────────────────────────────────────────────

    /// Deliver one noise event to every subscriber, applying handler steps
    /// as they are produced.
    fn deliver_noise<O: SimObserver>(
        &mut self,
        now:      Tick,
        dt:       f32,
        event:    &NoiseEvent,
        observer: &mut O,
    ) -> usize {
        observer.on_noise(now, event);

        // Explicit field borrows: the bus stays immutable for the whole
        // delivery while agent state mutates, which is exactly the
        // no-reentrancy discipline the bus documents.
        let bus = &self.bus;
        let roster = &mut self.roster;
        let table = &mut self.table;
        let paths = &mut self.paths;

        let mut transitions = 0;
        bus.publish(event, |listener, ev| {
            let i = listener.index();
            if !roster.alive[i] {
                return;
            }
            let step = roster.states[i].handle_noise(
                &roster.configs[i],
                roster.entities[i],
                roster.positions[i],
                ev,
            );
            transitions += apply_step(now, listener, step, roster, table, paths, observer, dt);
        });
        transitions
    }

    fn sensor_phase<O: SimObserver>(&mut self, now: Tick, dt: f32, observer: &mut O) -> usize {
        let roster = &mut self.roster;
        let table = &mut self.table;
        let paths = &mut self.paths;
        let los = &self.los;

        let mut transitions = 0;
        for i in 0..roster.count {
            if !roster.alive[i] {
                continue;
            }
            let agent = AgentId(i as u32);
            let origin = roster.positions[i];
            let events = roster.sensors[i].update(origin, table.candidates());

            for event in events {
                let entity = match event {
                    SensorEvent::Entered(e) | SensorEvent::Exited(e) => e,
                };
                let entity_position = table.position(entity);
                let step = roster.states[i].handle_sensor_event(
                    &roster.configs[i],
                    &roster.routes[i],
                    los,
                    origin,
                    &mut roster.facings[i],
                    event,
                    entity_position,
                );
                transitions += apply_step(now, agent, step, roster, table, paths, observer, dt);
            }
        }
        transitions
    }

    fn behavior_phase<O: SimObserver>(&mut self, now: Tick, dt: f32, observer: &mut O) -> usize {
        let roster = &mut self.roster;
        let table = &mut self.table;
        let paths = &mut self.paths;
        let los = &self.los;

        let mut transitions = 0;
        for i in 0..roster.count {
            if !roster.alive[i] {
                continue;
            }
            let agent = AgentId(i as u32);

            // Liveness resolution for the tracked candidate: a despawned
            // entity yields no position, and the machine treats that as the
            // reference having gone stale.
            let tracked_position = roster.states[i]
                .tracked
                .and_then(|entity| table.position(entity));

            let step = {
                let ctx = TickCtx {
                    agent,
                    position: roster.positions[i],
                    facing: roster.facings[i],
                    tracked_position,
                    paths: &*paths,
                    los,
                    dt,
                };
                roster.states[i].tick(&roster.configs[i], &roster.routes[i], &ctx)
            };
            transitions += apply_step(now, agent, step, roster, table, paths, observer, dt);
        }
        transitions
    }
}

// ── Intent application ────────────────────────────────────────────────────────

/// Apply one handler's [`Step`]: aim the pathfinder, advance along the path,
/// and report any transition.  Returns 1 if a transition fired.
#[allow(clippy::too_many_arguments)]
fn apply_step<P: Pathfinder, O: SimObserver>(
    now:      Tick,
    agent:    AgentId,
    step:     Step,
    roster:   &mut AgentRoster,
    table:    &mut EntityTable,
    paths:    &mut P,
    observer: &mut O,
    dt:       f32,
) -> usize {
    let i = agent.index();

    for intent in &step.intents {
        match *intent {
            Intent::SetPath(target) => paths.set_target(agent, target),

            Intent::Follow { speed } => {
                let position = roster.positions[i];
                match paths.next_waypoint(agent, position) {
                    Some(waypoint) => {
                        let direction = (waypoint - position).normalized();
                        let next = position.move_toward(waypoint, speed * dt);
                        roster.positions[i] = next;
                        if direction != Vec2::ZERO {
                            roster.facings[i] = direction;
                        }
                        table.set_position(roster.entities[i], next);
                    }
                    // No waypoint this tick: stationary, retried next tick.
                    None => {}
                }
            }
        }
    }

    match step.transition {
        Some(transition) => {
            observer.on_transition(now, agent, transition);
            if transition.to == AgentMode::Chase {
                if let Some(candidate) = roster.states[i].tracked {
                    observer.on_candidate_spotted(now, agent, candidate);
                }
            }
            1
        }
        None => 0,
    }
}
