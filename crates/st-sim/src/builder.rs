//! Fluent builder for constructing a [`Sim`].

use st_agent::{AgentConfig, BehaviorState, Intent, PatrolRoute};
use st_core::{AgentId, Vec2, SimConfig};
use st_events::NoiseBus;
use st_player::Player;
use st_world::{LineOfSight, Pathfinder, ProximitySensor};

use crate::{AgentRoster, EntityTable, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, L>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, …
/// - [`Player`] — position and tuning; the builder assigns its `EntityId`
/// - `P: Pathfinder`, `L: LineOfSight` — the world seams
/// - [`agents`][Self::agents] — one spawn point per agent
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                          |
/// |---------------|----------------------------------|
/// | `.routes(v)`  | All-empty `PatrolRoute`s         |
/// | `.configs(v)` | All-default `AgentConfig`s       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, player, DirectPathfinder::new(), walls)
///     .agents(vec![spawn_a, spawn_b])
///     .routes(routes)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Pathfinder, L: LineOfSight> {
    config:  SimConfig,
    player:  Player,
    paths:   P,
    los:     L,
    spawns:  Vec<Vec2>,
    routes:  Option<Vec<PatrolRoute>>,
    configs: Option<Vec<AgentConfig>>,
}

impl<P: Pathfinder, L: LineOfSight> SimBuilder<P, L> {
    /// Create a builder with all required inputs except the agent spawns.
    pub fn new(config: SimConfig, player: Player, paths: P, los: L) -> Self {
        Self {
            config,
            player,
            paths,
            los,
            spawns:  Vec::new(),
            routes:  None,
            configs: None,
        }
    }

    /// Supply the spawn point of each agent.  The list's length is the agent
    /// count every other per-agent input is validated against.
    pub fn agents(mut self, spawn_points: Vec<Vec2>) -> Self {
        self.spawns = spawn_points;
        self
    }

    /// Supply per-agent patrol routes (must be length `agent_count`).
    ///
    /// If not called, every agent gets an empty route and spawns straight
    /// into Alert at its spawn point.
    pub fn routes(mut self, routes: Vec<PatrolRoute>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Supply per-agent configs (must be length `agent_count`).
    pub fn configs(mut self, configs: Vec<AgentConfig>) -> Self {
        self.configs = Some(configs);
        self
    }

    /// Validate inputs, seed every agent's initial mode, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, L>> {
        if self.config.tick_duration_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.config.tick_duration_secs
            )));
        }

        let agent_count = self.spawns.len();

        // ── Validate and resolve optional inputs ──────────────────────────
        let routes = match self.routes {
            Some(r) => {
                if r.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      r.len(),
                        what:     "patrol routes",
                    });
                }
                r
            }
            None => vec![PatrolRoute::empty(); agent_count],
        };

        let configs = match self.configs {
            Some(c) => {
                if c.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      c.len(),
                        what:     "agent configs",
                    });
                }
                c
            }
            None => vec![AgentConfig::default(); agent_count],
        };

        // ── Wire identities: the table owns EntityId assignment ───────────
        let mut table = EntityTable::new();
        let mut player = self.player;
        player.entity = table.spawn(player.position, true);

        // ── Seed agents: body, subscription, sensor, initial mode ─────────
        let mut paths = self.paths;
        let mut bus = NoiseBus::new();

        let mut entities = Vec::with_capacity(agent_count);
        let mut positions = Vec::with_capacity(agent_count);
        let mut facings = Vec::with_capacity(agent_count);
        let mut sensors = Vec::with_capacity(agent_count);
        let mut states = Vec::with_capacity(agent_count);

        for (i, &spawn) in self.spawns.iter().enumerate() {
            let agent = AgentId(i as u32);
            entities.push(table.spawn(spawn, false));
            positions.push(spawn);
            facings.push(Vec2::new(1.0, 0.0));
            sensors.push(ProximitySensor::new(configs[i].vision_range));
            bus.subscribe(agent);

            let (state, step) = BehaviorState::spawn(&routes[i], &configs[i], spawn);
            for intent in &step.intents {
                if let Intent::SetPath(target) = intent {
                    paths.set_target(agent, *target);
                }
            }
            states.push(state);
        }

        let roster = AgentRoster {
            count: agent_count,
            entities,
            positions,
            facings,
            configs,
            routes,
            sensors,
            states,
            alive: vec![true; agent_count],
        };

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            player,
            bus,
            paths,
            los: self.los,
            roster,
            table,
        })
    }
}
