//! `st-world` — the world-query seams the AI core depends on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`pathfind`] | `Pathfinder` trait + `DirectPathfinder` default impl       |
//! | [`los`]      | `LineOfSight` trait, `RayHit`, `OpenField`, `WallMap`      |
//! | [`sensor`]   | `ProximitySensor` + `SensorEvent` enter/exit edges         |
//!
//! # Pluggability
//!
//! The behavior core calls navigation, line-of-sight, and proximity through
//! these seams, so applications can swap in a navmesh, a physics raycast, or
//! an engine-side detection volume without touching the state machine.  The
//! implementations shipped here are the reference ones: straight-line
//! pathing, segment-set raycasts, and a circular detection volume — enough
//! for headless simulation and deterministic tests.
//!
//! All queries are synchronous and complete within the tick they are issued;
//! none of them blocks or fails fatally.  "No route this tick" is an
//! `Option::None`, not an error.

pub mod los;
pub mod pathfind;
pub mod sensor;

#[cfg(test)]
mod tests;

pub use los::{LineOfSight, OpenField, RayHit, Wall, WallMap};
pub use pathfind::{DirectPathfinder, Pathfinder};
pub use sensor::{ProximitySensor, SensorEvent};
