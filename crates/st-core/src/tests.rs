//! Unit tests for st-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, EntityId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::from_index(42), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(EntityId(100) > EntityId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(EntityId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec2::new(10.0, 0.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn angle_between_axes() {
        let right = Vec2::new(1.0, 0.0);
        let up = Vec2::new(0.0, 1.0);
        let left = Vec2::new(-1.0, 0.0);
        assert!((right.angle_to_deg(up) - 90.0).abs() < 1e-3);
        assert!((right.angle_to_deg(left) - 180.0).abs() < 1e-3);
        assert!(right.angle_to_deg(right) < 1e-3);
    }

    #[test]
    fn angle_with_degenerate_vector_is_zero() {
        assert_eq!(Vec2::ZERO.angle_to_deg(Vec2::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn move_toward_steps_and_clamps() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(10.0, 0.0);
        let mid = from.move_toward(to, 4.0);
        assert_eq!(mid, Vec2::new(4.0, 0.0));
        // A step larger than the remaining distance lands exactly on target.
        assert_eq!(mid.move_toward(to, 100.0), to);
        // A step from the target stays put.
        assert_eq!(to.move_toward(to, 1.0), to);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 0.5);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn ticks_for_duration_rounds_up() {
        let clock = SimClock::new(0.5);
        assert_eq!(clock.ticks_for_secs(3.0), 6);
        assert_eq!(clock.ticks_for_secs(3.1), 7);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks: 600,
            ..SimConfig::default()
        };
        assert_eq!(cfg.end_tick(), Tick(600));
        assert!((cfg.make_clock().tick_duration_secs - 1.0 / 60.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod locomotion {
    use crate::Locomotion;

    #[test]
    fn only_sneaking_is_silent() {
        assert!(Locomotion::Sneaking.is_silent());
        assert!(!Locomotion::Walking.is_silent());
        assert!(!Locomotion::Running.is_silent());
    }

    #[test]
    fn display() {
        assert_eq!(Locomotion::Running.to_string(), "running");
        assert_eq!(Locomotion::default(), Locomotion::Walking);
    }
}
