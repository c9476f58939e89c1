//! `st-perception` — can this agent see that candidate?
//!
//! One deliberately small crate: the visibility rules are the subtlest part
//! of the AI and deserve their own unit-test surface, isolated from the
//! state machine that consumes them.
//!
//! # The asymmetry
//!
//! Visibility is evaluated under two different rules depending on how the
//! question arises:
//!
//! - **Acquisition** — triggered once, by a proximity-enter edge.  The
//!   candidate is visible if the sight ray is unobstructed, *regardless of
//!   facing*.  Entering an agent's detection volume is enough to make it
//!   snap around.
//! - **Retention** — re-tested every tick for the currently tracked
//!   candidate.  The ray must stay unobstructed AND the bearing deviation
//!   from the agent's facing must stay within the vision-loss angle.
//!
//! Retention being strictly harder than acquisition prevents flicker at the
//! cone boundary: a candidate cannot oscillate between acquired and lost by
//! straddling the acquisition threshold, because acquisition happens on a
//! discrete edge and loss on the stricter continuous test.

pub mod visibility;


pub use visibility::{Perception, PerceptionResult};
