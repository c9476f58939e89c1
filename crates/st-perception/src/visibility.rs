//! The two-sided visibility evaluator.

use st_core::Vec2;
use st_world::LineOfSight;

/// Outcome of one visibility evaluation.
///
/// `position` echoes the candidate position the test ran against; it is
/// meaningful to the caller only while `visible` is true (or as a
/// previously-confirmed location it chooses to remember).  Results are
/// recomputed every tick and never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerceptionResult {
    pub visible:  bool,
    pub position: Vec2,
}

/// Visibility rules for one agent.
///
/// Holds only the vision-loss angle; positions, facing, and the occlusion
/// world arrive per call so the evaluator itself stays stateless and
/// trivially testable.
#[derive(Copy, Clone, Debug)]
pub struct Perception {
    vision_loss_angle_deg: f32,
}

impl Perception {
    /// `vision_loss_angle_deg` is the maximum bearing deviation from facing
    /// (degrees, half-angle) within which a *tracked* candidate stays
    /// visible.
    pub fn new(vision_loss_angle_deg: f32) -> Self {
        Self { vision_loss_angle_deg }
    }

    pub fn vision_loss_angle_deg(&self) -> f32 {
        self.vision_loss_angle_deg
    }

    /// Acquisition test: line of sight only, facing ignored.
    ///
    /// Used exactly once per candidate, on the proximity-enter edge.
    pub fn acquire<L>(&self, los: &L, agent: Vec2, candidate: Vec2) -> bool
    where
        L: LineOfSight + ?Sized,
    {
        !los.cast(agent, candidate).obstructed
    }

    /// Retention test: line of sight AND the vision cone.
    ///
    /// Used every tick against the tracked candidate; failing either clause
    /// loses the target.
    pub fn retain<L>(&self, los: &L, agent: Vec2, facing: Vec2, candidate: Vec2) -> bool
    where
        L: LineOfSight + ?Sized,
    {
        if los.cast(agent, candidate).obstructed {
            return false;
        }
        facing.angle_to_deg(candidate - agent) <= self.vision_loss_angle_deg
    }

    /// Run the retention test and package the result for the tick's
    /// consumer.
    pub fn observe<L>(
        &self,
        los:       &L,
        agent:     Vec2,
        facing:    Vec2,
        candidate: Vec2,
    ) -> PerceptionResult
    where
        L: LineOfSight + ?Sized,
    {
        PerceptionResult {
            visible:  self.retain(los, agent, facing, candidate),
            position: candidate,
        }
    }
}
