//! Unit tests for st-world.

use st_core::{AgentId, EntityId, Vec2};

use crate::{
    DirectPathfinder, LineOfSight, OpenField, Pathfinder, ProximitySensor, SensorEvent, WallMap,
};

// ── Pathfinder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfind_tests {
    use super::*;

    #[test]
    fn no_target_means_complete_and_no_waypoint() {
        let paths = DirectPathfinder::new();
        assert!(paths.is_complete(AgentId(0), Vec2::ZERO));
        assert_eq!(paths.next_waypoint(AgentId(0), Vec2::ZERO), None);
    }

    #[test]
    fn waypoint_is_the_target() {
        let mut paths = DirectPathfinder::new();
        let target = Vec2::new(50.0, 0.0);
        paths.set_target(AgentId(0), target);
        assert_eq!(paths.next_waypoint(AgentId(0), Vec2::ZERO), Some(target));
        assert!(!paths.is_complete(AgentId(0), Vec2::ZERO));
    }

    #[test]
    fn arrival_within_radius() {
        let mut paths = DirectPathfinder::with_arrive_radius(2.0);
        paths.set_target(AgentId(0), Vec2::new(10.0, 0.0));
        assert!(!paths.is_complete(AgentId(0), Vec2::new(7.0, 0.0)));
        assert!(paths.is_complete(AgentId(0), Vec2::new(8.5, 0.0)));
    }

    #[test]
    fn retarget_replaces_previous() {
        let mut paths = DirectPathfinder::new();
        paths.set_target(AgentId(0), Vec2::new(10.0, 0.0));
        paths.set_target(AgentId(0), Vec2::new(0.0, 10.0));
        assert_eq!(
            paths.next_waypoint(AgentId(0), Vec2::ZERO),
            Some(Vec2::new(0.0, 10.0))
        );
    }

    #[test]
    fn clear_drops_target() {
        let mut paths = DirectPathfinder::new();
        paths.set_target(AgentId(0), Vec2::new(10.0, 0.0));
        paths.clear(AgentId(0));
        assert_eq!(paths.next_waypoint(AgentId(0), Vec2::ZERO), None);
        assert!(paths.is_complete(AgentId(0), Vec2::ZERO));
    }

    #[test]
    fn agents_are_independent() {
        let mut paths = DirectPathfinder::new();
        paths.set_target(AgentId(0), Vec2::new(1.0, 0.0));
        assert_eq!(paths.next_waypoint(AgentId(1), Vec2::ZERO), None);
    }
}

// ── Line of sight ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod los_tests {
    use super::*;

    #[test]
    fn open_field_is_always_clear() {
        let hit = OpenField.cast(Vec2::ZERO, Vec2::new(1000.0, 1000.0));
        assert!(!hit.obstructed);
        assert_eq!(hit.first_hit, None);
    }

    #[test]
    fn wall_blocks_crossing_ray() {
        let mut map = WallMap::new();
        // Vertical wall at x=5 spanning y in [-10, 10].
        map.add_wall(Vec2::new(5.0, -10.0), Vec2::new(5.0, 10.0));
        let hit = map.cast(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(hit.obstructed);
        assert_eq!(hit.first_hit, None);
    }

    #[test]
    fn ray_beside_wall_is_clear() {
        let mut map = WallMap::new();
        map.add_wall(Vec2::new(5.0, 1.0), Vec2::new(5.0, 10.0));
        // Ray passes below the wall's lower end.
        let hit = map.cast(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(!hit.obstructed);
    }

    #[test]
    fn ray_stopping_short_of_wall_is_clear() {
        let mut map = WallMap::new();
        map.add_wall(Vec2::new(5.0, -10.0), Vec2::new(5.0, 10.0));
        let hit = map.cast(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
        assert!(!hit.obstructed);
    }

    #[test]
    fn nearest_wall_reported_first() {
        let near = EntityId(1);
        let far = EntityId(2);
        let mut map = WallMap::new();
        map.add_tagged_wall(Vec2::new(8.0, -5.0), Vec2::new(8.0, 5.0), far);
        map.add_tagged_wall(Vec2::new(3.0, -5.0), Vec2::new(3.0, 5.0), near);
        let hit = map.cast(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(hit.obstructed);
        assert_eq!(hit.first_hit, Some(near));
    }

    #[test]
    fn parallel_wall_never_hits() {
        let mut map = WallMap::new();
        map.add_wall(Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0));
        let hit = map.cast(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(!hit.obstructed);
    }
}

// ── Proximity sensor ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sensor_tests {
    use super::*;

    const ORIGIN: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[test]
    fn enter_edge_fires_once() {
        let mut sensor = ProximitySensor::new(10.0);
        let events = sensor.update(ORIGIN, [(EntityId(1), Vec2::new(5.0, 0.0))]);
        assert_eq!(events, vec![SensorEvent::Entered(EntityId(1))]);
        // Still inside: no further edges.
        let events = sensor.update(ORIGIN, [(EntityId(1), Vec2::new(6.0, 0.0))]);
        assert!(events.is_empty());
        assert!(sensor.contains(EntityId(1)));
    }

    #[test]
    fn exit_edge_on_leaving() {
        let mut sensor = ProximitySensor::new(10.0);
        sensor.update(ORIGIN, [(EntityId(1), Vec2::new(5.0, 0.0))]);
        let events = sensor.update(ORIGIN, [(EntityId(1), Vec2::new(50.0, 0.0))]);
        assert_eq!(events, vec![SensorEvent::Exited(EntityId(1))]);
        assert!(!sensor.contains(EntityId(1)));
    }

    #[test]
    fn despawn_surfaces_as_exit() {
        let mut sensor = ProximitySensor::new(10.0);
        sensor.update(ORIGIN, [(EntityId(1), Vec2::new(5.0, 0.0))]);
        // Entity gone from the feed entirely.
        let events = sensor.update(ORIGIN, []);
        assert_eq!(events, vec![SensorEvent::Exited(EntityId(1))]);
    }

    #[test]
    fn outside_radius_never_enters() {
        let mut sensor = ProximitySensor::new(10.0);
        let events = sensor.update(ORIGIN, [(EntityId(1), Vec2::new(10.5, 0.0))]);
        assert!(events.is_empty());
        assert!(!sensor.contains(EntityId(1)));
    }

    #[test]
    fn exits_reported_before_enters() {
        let mut sensor = ProximitySensor::new(10.0);
        sensor.update(ORIGIN, [(EntityId(1), Vec2::new(5.0, 0.0))]);
        let events = sensor.update(
            ORIGIN,
            [
                (EntityId(1), Vec2::new(99.0, 0.0)), // leaves
                (EntityId(2), Vec2::new(3.0, 0.0)),  // arrives
            ],
        );
        assert_eq!(
            events,
            vec![
                SensorEvent::Exited(EntityId(1)),
                SensorEvent::Entered(EntityId(2)),
            ]
        );
    }

    #[test]
    fn simultaneous_enters_in_id_order() {
        let mut sensor = ProximitySensor::new(10.0);
        let events = sensor.update(
            ORIGIN,
            [
                (EntityId(7), Vec2::new(1.0, 0.0)),
                (EntityId(3), Vec2::new(2.0, 0.0)),
            ],
        );
        assert_eq!(
            events,
            vec![
                SensorEvent::Entered(EntityId(3)),
                SensorEvent::Entered(EntityId(7)),
            ]
        );
    }
}
