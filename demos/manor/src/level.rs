//! The manor floor: walls, guard routes, and spawn points.
//!
//! A 600x400 ground floor split into a west and an east hall by a wall with
//! a doorway at mid-height.  Two guards patrol one hall each; the player
//! starts in the north-west corner.

use st_core::Vec2;
use st_world::WallMap;

pub const GUARD_COUNT: usize = 2;

pub const PLAYER_SPAWN: Vec2 = Vec2 { x: 50.0, y: 50.0 };

// Guard 0 walks a rectangle around the west hall; guard 1 paces the east
// hall.  Spawns sit on each route's first waypoint.
pub const ROUTES_CSV: &str = "\
agent_id,order,x,y,looping
0,0,100.0,100.0,true
0,1,100.0,300.0,true
0,2,250.0,300.0,true
0,3,250.0,100.0,true
1,0,350.0,200.0,true
1,1,550.0,200.0,true
";

pub fn guard_spawns() -> Vec<Vec2> {
    vec![Vec2::new(100.0, 100.0), Vec2::new(350.0, 200.0)]
}

/// Perimeter walls plus the dividing wall, leaving a doorway between
/// y = 160 and y = 240.
pub fn build_walls() -> WallMap {
    let mut walls = WallMap::new();

    // Perimeter.
    walls.add_wall(Vec2::new(0.0, 0.0), Vec2::new(600.0, 0.0));
    walls.add_wall(Vec2::new(600.0, 0.0), Vec2::new(600.0, 400.0));
    walls.add_wall(Vec2::new(600.0, 400.0), Vec2::new(0.0, 400.0));
    walls.add_wall(Vec2::new(0.0, 400.0), Vec2::new(0.0, 0.0));

    // Dividing wall with the doorway gap.
    walls.add_wall(Vec2::new(300.0, 0.0), Vec2::new(300.0, 160.0));
    walls.add_wall(Vec2::new(300.0, 240.0), Vec2::new(300.0, 400.0));

    walls
}
