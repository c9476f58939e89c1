//! Per-agent tunables.

use st_perception::Perception;

/// Where an agent aims its search after losing a chased target.
///
/// Both answers are defensible — search where the target was last confirmed,
/// or fan out from wherever the chase broke — so this is a policy rather
/// than a constant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum LostTargetPolicy {
    /// Investigate the last confirmed position of the target (default).
    #[default]
    LastKnown,
    /// Investigate from wherever the agent is standing when the target is
    /// lost.
    CurrentPosition,
}

/// Tunables for one agent, fixed at spawn.
///
/// Defaults carry the hand-tuned values the behavior was balanced against;
/// scenario authors override per agent as needed.
#[derive(Copy, Clone, Debug)]
pub struct AgentConfig {
    /// Movement speed while patrolling or investigating (units/sec).
    pub patrol_speed: f32,

    /// Movement speed while chasing (units/sec).
    pub chase_speed: f32,

    /// Half-angle of the vision cone (degrees) a *tracked* candidate must
    /// stay within.  Acquisition ignores it.
    pub vision_loss_angle_deg: f32,

    /// How long an Alert lasts without re-stimulation (seconds).
    pub alert_duration_secs: f32,

    /// Radius of the proximity detection volume (units).
    pub vision_range: f32,

    /// Fallback-point policy when a chased target is lost.
    pub lost_target_policy: LostTargetPolicy,
}

impl AgentConfig {
    /// The perception evaluator this config implies.
    #[inline]
    pub fn perception(&self) -> Perception {
        Perception::new(self.vision_loss_angle_deg)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            patrol_speed:          80.0,
            chase_speed:           160.0,
            vision_loss_angle_deg: 75.0,
            alert_duration_secs:   3.0,
            vision_range:          180.0,
            lost_target_policy:    LostTargetPolicy::default(),
        }
    }
}
