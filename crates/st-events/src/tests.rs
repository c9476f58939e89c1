//! Unit tests for st-events.

use st_core::{AgentId, EntityId, Vec2};

use crate::{NoiseBus, NoiseEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn event_at(x: f32, y: f32, radius: f32) -> NoiseEvent {
    NoiseEvent::new(Vec2::new(x, y), radius, Some(EntityId(0)))
}

// ── NoiseEvent ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn reaches_within_radius() {
        let e = event_at(0.0, 0.0, 100.0);
        assert!(e.reaches(Vec2::new(60.0, 80.0))); // distance exactly 100
        assert!(e.reaches(Vec2::new(10.0, 10.0)));
        assert!(!e.reaches(Vec2::new(100.0, 1.0)));
    }

    #[test]
    fn zero_radius_reaches_only_origin() {
        let e = event_at(5.0, 5.0, 0.0);
        assert!(e.reaches(Vec2::new(5.0, 5.0)));
        assert!(!e.reaches(Vec2::new(5.1, 5.0)));
    }

    #[test]
    fn negative_radius_clamped() {
        let e = NoiseEvent::new(Vec2::ZERO, -10.0, None);
        assert_eq!(e.radius, 0.0);
    }
}

// ── NoiseBus ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bus_tests {
    use super::*;

    #[test]
    fn subscribe_is_idempotent() {
        let mut bus = NoiseBus::new();
        assert!(bus.subscribe(AgentId(0)));
        assert!(!bus.subscribe(AgentId(0)));
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut bus = NoiseBus::new();
        bus.subscribe(AgentId(0));
        assert!(bus.unsubscribe(AgentId(0)));
        assert!(!bus.unsubscribe(AgentId(0)));
        assert!(bus.is_empty());
    }

    #[test]
    fn delivery_in_subscription_order() {
        let mut bus = NoiseBus::new();
        bus.subscribe(AgentId(2));
        bus.subscribe(AgentId(0));
        bus.subscribe(AgentId(1));

        let mut order = Vec::new();
        bus.publish(&event_at(0.0, 0.0, 1.0), |l, _| order.push(l));
        assert_eq!(order, vec![AgentId(2), AgentId(0), AgentId(1)]);
    }

    #[test]
    fn unsubscribe_preserves_remaining_order() {
        let mut bus = NoiseBus::new();
        bus.subscribe(AgentId(2));
        bus.subscribe(AgentId(0));
        bus.subscribe(AgentId(1));
        bus.unsubscribe(AgentId(0));

        let mut order = Vec::new();
        bus.publish(&event_at(0.0, 0.0, 1.0), |l, _| order.push(l));
        assert_eq!(order, vec![AgentId(2), AgentId(1)]);
    }

    #[test]
    fn unsubscribed_listener_never_observes() {
        let mut bus = NoiseBus::new();
        bus.subscribe(AgentId(0));
        bus.subscribe(AgentId(1));
        bus.unsubscribe(AgentId(0));

        let mut delivered = Vec::new();
        bus.publish(&event_at(0.0, 0.0, 1.0), |l, _| delivered.push(l));
        assert_eq!(delivered, vec![AgentId(1)]);
        assert!(!bus.is_subscribed(AgentId(0)));
    }

    #[test]
    fn every_listener_sees_the_same_event() {
        let mut bus = NoiseBus::new();
        for i in 0..4 {
            bus.subscribe(AgentId(i));
        }
        let event = event_at(3.0, 4.0, 250.0);
        let mut seen = Vec::new();
        bus.publish(&event, |_, e| seen.push(*e));
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|e| *e == event));
    }

    #[test]
    fn publish_on_empty_bus_is_a_noop() {
        let bus = NoiseBus::new();
        let mut count = 0;
        bus.publish(&event_at(0.0, 0.0, 1.0), |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
