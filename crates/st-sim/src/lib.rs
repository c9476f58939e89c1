//! `st-sim` — the tick loop that wires the stealth core together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`entities`] | `EntityTable` — perceivable bodies and capability tags   |
//! | [`roster`]   | `AgentRoster` — parallel per-agent state arrays          |
//! | [`sim`]      | `Sim` and its phase-ordered tick loop                    |
//! | [`builder`]  | `SimBuilder` — validated construction                    |
//! | [`observer`] | `SimObserver` trait + `NoopObserver`                     |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # Design notes
//!
//! One `step` runs four phases, strictly in order, on a single thread:
//!
//! 1. **Player phase** — integrate player movement, run the noise emitter,
//!    and deliver any event through the bus.  Every subscribed agent's noise
//!    handler runs before the phase ends.
//! 2. **Sensor phase** — update each agent's proximity sensor against the
//!    candidate entities and feed the enter/exit edges to the vision
//!    handlers, in ascending `AgentId` order.
//! 3. **Behavior phase** — per-tick state machine update for every agent in
//!    ascending `AgentId` order; intents are applied immediately (path
//!    aiming, clamped straight-leg movement).
//! 4. **Clock advance.**
//!
//! No phase blocks, queues, or defers: every query completes within the
//! tick, which is what keeps the state machine's view of the world
//! consistent without locks or generations.

pub mod builder;
pub mod entities;
pub mod error;
pub mod observer;
pub mod roster;
pub mod sim;


pub use builder::SimBuilder;
pub use entities::EntityTable;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use roster::AgentRoster;
pub use sim::Sim;
