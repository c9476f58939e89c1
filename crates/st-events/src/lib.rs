//! `st-events` — the noise event channel between the player and the AI.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`noise`] | `NoiseEvent` — origin, radius, source identity            |
//! | [`bus`]   | `NoiseBus` — ordered, synchronous listener registry       |
//!
//! # Design notes
//!
//! Delivery is synchronous and ordered: every listener subscribed at publish
//! time observes the event before `publish` returns, in subscription order.
//! There is no queue — a listener subscribed after the call never sees the
//! event.  The bus holds only listener identities; the caller routes each
//! delivery to the right listener state through a sink closure, which keeps
//! the registry borrow-safe against the mutable agent state it fans out to
//! and makes reentrant publishing a compile error rather than a runtime
//! hazard.

pub mod bus;
pub mod noise;

#[cfg(test)]
mod tests;

pub use bus::NoiseBus;
pub use noise::NoiseEvent;
