//! `st-agent` — the perception-driven behavior state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`mode`]   | `AgentMode` (Patrol / Alert / Chase), `Transition`, causes     |
//! | [`state`]  | `BehaviorState` — the per-agent mutable record                 |
//! | [`config`] | `AgentConfig`, `LostTargetPolicy`                              |
//! | [`route`]  | `PatrolRoute` — immutable waypoint sequence                    |
//! | [`loader`] | CSV patrol-route loader                                        |
//! | [`fsm`]    | The state machine: spawn seeding, event handlers, tick update  |
//! | [`error`]  | `RouteError`                                                   |
//!
//! # Design notes
//!
//! The state machine never mutates the world.  Each handler and the per-tick
//! update return a [`Step`][fsm::Step]: a short list of [`Intent`][fsm::Intent]s
//! (aim the pathfinder, follow the path at a speed) plus the transition that
//! occurred, if any.  The simulation loop applies the intents and forwards
//! the transition to its observer.  Keeping the machine read-only toward its
//! collaborators means every transition in this crate is unit-testable with
//! nothing but a `DirectPathfinder` and an `OpenField`.
//!
//! Failure is absorbed, never raised: an empty patrol route degrades to
//! Alert-in-place, a failed path query leaves the agent stationary for one
//! tick, and a stale tracked candidate is detected by liveness before it is
//! ever dereferenced.

pub mod config;
pub mod error;
pub mod fsm;
pub mod loader;
pub mod mode;
pub mod route;
pub mod state;


pub use config::{AgentConfig, LostTargetPolicy};
pub use error::RouteError;
pub use fsm::{Intent, Step, TickCtx};
pub use loader::{load_routes_csv, load_routes_reader};
pub use mode::{AgentMode, Transition, TransitionCause};
pub use route::PatrolRoute;
pub use state::BehaviorState;
