//! Parallel per-agent state arrays.

use st_agent::{AgentConfig, AgentMode, BehaviorState, PatrolRoute};
use st_core::{AgentId, EntityId, Vec2};
use st_world::ProximitySensor;

/// All per-agent simulation state, stored as parallel `Vec`s indexed by
/// `AgentId`.
///
/// Each agent exclusively owns its slot: the tick loop only ever touches one
/// agent's entries at a time, and no agent reads another's state directly —
/// cross-agent influence flows exclusively through published events.
///
/// Despawned agents keep their slot with `alive = false` so `AgentId`s stay
/// stable; every loop over the roster skips dead slots.
pub struct AgentRoster {
    /// Number of slots.  Equals the length of every `Vec` below.
    pub count: usize,

    /// Each agent's own perceivable body, used for noise self-filtering.
    pub entities: Vec<EntityId>,

    pub positions: Vec<Vec2>,

    /// Unit facing vectors, updated by movement and by sensor snaps.
    pub facings: Vec<Vec2>,

    pub configs: Vec<AgentConfig>,

    /// Immutable after construction; traversal position lives in `states`.
    pub routes: Vec<PatrolRoute>,

    pub sensors: Vec<ProximitySensor>,

    pub states: Vec<BehaviorState>,

    pub alive: Vec<bool>,
}

impl AgentRoster {
    /// Iterator over all `AgentId`s in ascending index order, dead or alive.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.alive.get(agent.index()).copied().unwrap_or(false)
    }

    /// Current mode of one agent.
    #[inline]
    pub fn mode(&self, agent: AgentId) -> AgentMode {
        self.states[agent.index()].mode
    }
}
