//! `NoiseBus` — ordered, synchronous listener registry.
//!
//! # Why a registry and not callbacks
//!
//! Storing listener closures in the bus would force it to alias the agent
//! state those closures mutate, which Rust (correctly) refuses.  Instead the
//! bus owns only the *membership and ordering* question; `publish` hands
//! each `(listener, event)` pair to a sink closure supplied by the caller,
//! which borrows the agent state for the duration of the delivery.  A
//! consequence worth keeping: the bus is immutably borrowed across the whole
//! fan-out, so a listener cannot re-enter `publish` — the reentrancy ban is
//! enforced by the compiler.

use st_core::AgentId;

use crate::NoiseEvent;

/// The process-wide noise channel.
///
/// Subscription order is delivery order.  Subscribe/unsubscribe happen only
/// at agent spawn/despawn — never during delivery — so the registry is never
/// mutated while it is being iterated.
#[derive(Default)]
pub struct NoiseBus {
    listeners: Vec<AgentId>,
}

impl NoiseBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for future events.
    ///
    /// Idempotent: returns `false` (and changes nothing) if the listener is
    /// already subscribed, `true` if membership changed.
    pub fn subscribe(&mut self, listener: AgentId) -> bool {
        if self.listeners.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove `listener` from the registry, preserving the relative order of
    /// the remaining listeners.
    ///
    /// Idempotent: returns `false` if the listener was not subscribed.
    pub fn unsubscribe(&mut self, listener: AgentId) -> bool {
        match self.listeners.iter().position(|&l| l == listener) {
            Some(i) => {
                self.listeners.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_subscribed(&self, listener: AgentId) -> bool {
        self.listeners.contains(&listener)
    }

    /// Number of current subscribers.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every current subscriber, in subscription order,
    /// before returning.
    ///
    /// `deliver` is invoked once per subscriber.  Source-identity filtering
    /// (an agent ignoring its own noise) is the listener's job, not the
    /// bus's — the bus does not know which entity a listener embodies.
    pub fn publish<F>(&self, event: &NoiseEvent, mut deliver: F)
    where
        F: FnMut(AgentId, &NoiseEvent),
    {
        for &listener in &self.listeners {
            deliver(listener, event);
        }
    }
}
