//! Planar coordinate type and vector math.
//!
//! `Vec2` uses `f32` world units throughout.  The simulation is 2D; vertical
//! layering (floors, stairs) is an application concern and never reaches this
//! core.  Single precision keeps the per-agent state arrays compact and is
//! more than sufficient at room-to-building scale.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D point or direction vector in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length — cheaper than [`length`][Self::length] for threshold
    /// comparisons.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (perp-dot).  Sign gives the winding of `other`
    /// relative to `self`; zero means parallel.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Unit-length copy of `self`, or `Vec2::ZERO` if the vector is too
    /// short to normalize meaningfully.
    pub fn normalized(self) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq <= f32::EPSILON {
            return Vec2::ZERO;
        }
        let inv = len_sq.sqrt().recip();
        Vec2::new(self.x * inv, self.y * inv)
    }

    /// Unsigned angle between `self` and `other` in degrees, in `[0, 180]`.
    ///
    /// Returns `0.0` when either vector is (near-)zero — a degenerate facing
    /// never blocks perception on its own.
    pub fn angle_to_deg(self, other: Vec2) -> f32 {
        let a = self.normalized();
        let b = other.normalized();
        if a == Vec2::ZERO || b == Vec2::ZERO {
            return 0.0;
        }
        a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Step from `self` toward `target` by at most `max_step`, clamping at
    /// the target.  The whole-tick motion primitive: repeated calls advance a
    /// body along a straight leg without overshoot.
    pub fn move_toward(self, target: Vec2, max_step: f32) -> Vec2 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step || dist <= f32::EPSILON {
            return target;
        }
        self + delta * (max_step / dist)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
