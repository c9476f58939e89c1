//! `st-core` — foundational types for the `rust_stealth` simulation framework.
//!
//! This crate is a dependency of every other `st-*` crate.  It intentionally
//! has no `st-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `EntityId`                                 |
//! | [`vec2`]        | `Vec2` planar point/vector math                       |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`locomotion`]  | `Locomotion` enum (sneak / walk / run)                |
//! | [`error`]       | `StError`, `StResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod locomotion;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StError, StResult};
pub use ids::{AgentId, EntityId};
pub use locomotion::Locomotion;
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::Vec2;
