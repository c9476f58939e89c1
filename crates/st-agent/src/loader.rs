//! CSV patrol-route loader.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows for the same agent are sorted by `order`
//! before the route is built, and must all share the same `looping` value.
//!
//! ```csv
//! agent_id,order,x,y,looping
//! 0,0,100.0,50.0,true
//! 0,1,300.0,50.0,true
//! 1,0,40.0,200.0,false
//! 1,1,40.0,400.0,false
//! ```
//!
//! Agents absent from the CSV receive an empty [`PatrolRoute`] — they spawn
//! straight into Alert, which is the machine's documented degradation, not
//! an error.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use st_core::Vec2;

use crate::{PatrolRoute, RouteError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    agent_id: u32,
    order:    u32,
    x:        f32,
    y:        f32,
    looping:  bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load per-agent [`PatrolRoute`]s from a CSV file.
///
/// Returns a `Vec` of length `agent_count`, indexed by `AgentId`.  Agents
/// with no rows in the file receive [`PatrolRoute::empty`].
pub fn load_routes_csv(path: &Path, agent_count: usize) -> Result<Vec<PatrolRoute>, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_routes_reader(file, agent_count)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for routes embedded in
/// scenario binaries.
pub fn load_routes_reader<R: Read>(
    reader:      R,
    agent_count: usize,
) -> Result<Vec<PatrolRoute>, RouteError> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_agent: HashMap<u32, Vec<RouteRecord>> = HashMap::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        by_agent.entry(row.agent_id).or_default().push(row);
    }

    // ── Build one PatrolRoute per agent ───────────────────────────────────
    let mut routes: Vec<PatrolRoute> = Vec::with_capacity(agent_count);

    for i in 0..agent_count as u32 {
        match by_agent.remove(&i) {
            None => routes.push(PatrolRoute::empty()),
            Some(mut rows) => {
                rows.sort_by_key(|r| r.order);

                let looping = rows[0].looping;
                if rows.iter().any(|r| r.looping != looping) {
                    return Err(RouteError::Parse(format!(
                        "agent {i}: rows disagree on the looping flag"
                    )));
                }

                let waypoints = rows.iter().map(|r| Vec2::new(r.x, r.y)).collect();
                routes.push(PatrolRoute::new(waypoints, looping));
            }
        }
    }

    Ok(routes)
}
