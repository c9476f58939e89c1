//! Line-of-sight seam and the segment-set reference implementation.

use st_core::{EntityId, Vec2};

/// Result of a sight ray from one point toward another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// `true` if something blocks the ray strictly between the endpoints.
    pub obstructed: bool,

    /// The first obstructing entity along the ray, when the geometry is
    /// tagged with one.  `None` for anonymous level geometry and for
    /// unobstructed rays.
    pub first_hit: Option<EntityId>,
}

impl RayHit {
    /// An unobstructed ray.
    pub const CLEAR: RayHit = RayHit {
        obstructed: false,
        first_hit:  None,
    };
}

/// Pluggable occlusion query.
///
/// Implementations answer one question: can a ray travel from `from` to
/// `to` without hitting level geometry?  The target body itself is never
/// part of the occluder set — reaching `to` means the candidate is seen.
pub trait LineOfSight {
    fn cast(&self, from: Vec2, to: Vec2) -> RayHit;
}

/// A world with no occluders — every ray is clear.  The test and benchmark
/// default.
pub struct OpenField;

impl LineOfSight for OpenField {
    fn cast(&self, _from: Vec2, _to: Vec2) -> RayHit {
        RayHit::CLEAR
    }
}

// ── WallMap ───────────────────────────────────────────────────────────────────

/// One occluding segment, optionally tagged with the entity it belongs to
/// (a door, a movable crate).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
    pub entity: Option<EntityId>,
}

/// Occlusion from a flat list of wall segments.
///
/// Ray casts scan every segment and report the nearest intersection.
/// Levels carry tens of walls and the cast count per tick is bounded by the
/// agent count, so the linear scan never shows up in a profile.
#[derive(Default)]
pub struct WallMap {
    walls: Vec<Wall>,
}

impl WallMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anonymous occluder segment.
    pub fn add_wall(&mut self, a: Vec2, b: Vec2) {
        self.walls.push(Wall { a, b, entity: None });
    }

    /// Add an occluder owned by a known entity.
    pub fn add_tagged_wall(&mut self, a: Vec2, b: Vec2, entity: EntityId) {
        self.walls.push(Wall { a, b, entity: Some(entity) });
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

impl LineOfSight for WallMap {
    fn cast(&self, from: Vec2, to: Vec2) -> RayHit {
        let dir = to - from;
        let mut nearest: Option<(f32, Option<EntityId>)> = None;

        for wall in &self.walls {
            if let Some(t) = segment_hit(from, dir, wall.a, wall.b) {
                match nearest {
                    Some((best, _)) if best <= t => {}
                    _ => nearest = Some((t, wall.entity)),
                }
            }
        }

        match nearest {
            Some((_, entity)) => RayHit {
                obstructed: true,
                first_hit:  entity,
            },
            None => RayHit::CLEAR,
        }
    }
}

/// Parametric segment/segment intersection.
///
/// Returns the ray parameter `t` where the ray `p + t*r` (t in (0, 1))
/// crosses the wall `a..b`, or `None` if they miss.  Endpoints are excluded
/// with a small epsilon so a ray terminating exactly on a wall (a candidate
/// pressed against it) is not counted as obstructed, and collinear overlap
/// is treated as a miss.
fn segment_hit(p: Vec2, r: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    const EPS: f32 = 1e-4;

    let s = b - a;
    let denom = r.cross(s);
    if denom.abs() < EPS {
        return None; // parallel or collinear
    }

    let ap = a - p;
    let t = ap.cross(s) / denom;
    let u = ap.cross(r) / denom;

    if t > EPS && t < 1.0 - EPS && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}
