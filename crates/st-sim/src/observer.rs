//! Simulation observer trait for progress reporting and data collection.

use st_agent::Transition;
use st_core::{AgentId, EntityId, Tick};
use st_events::NoiseEvent;

use crate::AgentRoster;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl SimObserver for TransitionPrinter {
///     fn on_transition(&mut self, tick: Tick, agent: AgentId, t: Transition) {
///         println!("{tick}: {agent} {} -> {} ({})", t.from, t.to, t.cause);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every noise event published this tick, before delivery.
    fn on_noise(&mut self, _tick: Tick, _event: &NoiseEvent) {}

    /// Called for every behavior transition, including re-triggers
    /// (`from == to`).
    fn on_transition(&mut self, _tick: Tick, _agent: AgentId, _transition: Transition) {}

    /// Called when an agent acquires a candidate and begins a chase.
    fn on_candidate_spotted(&mut self, _tick: Tick, _agent: AgentId, _candidate: EntityId) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks).  Read-only access to the full roster so output writers can
    /// record positions and modes without the sim knowing any format.
    fn on_snapshot(&mut self, _tick: Tick, _roster: &AgentRoster) {}

    /// Called at the end of each tick.  `transitions` is the number of
    /// behavior transitions that fired this tick.
    fn on_tick_end(&mut self, _tick: Tick, _transitions: usize) {}

    /// Called once after the final tick of a `run`.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `step`
/// or `run` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
