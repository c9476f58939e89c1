//! manor — smallest runnable scenario for the rust_stealth framework.
//!
//! Two guards patrol a 600x400 manor floor while a scripted player sneaks
//! in, wanders the halls, and finally makes a run for it.  Behavior traces
//! land in `./trace_output/` as CSV; a summary prints at the end.

mod level;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use st_agent::{Transition, load_routes_reader};
use st_core::{AgentId, EntityId, Locomotion, SimConfig, Tick, Vec2};
use st_events::NoiseEvent;
use st_player::{Player, PlayerInput};
use st_sim::{AgentRoster, SimBuilder, SimObserver};
use st_trace::{CsvTraceWriter, SimTraceObserver};
use st_world::DirectPathfinder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const TICK_DURATION_SECS: f32 = 0.1; // 10 Hz fixed timestep
const SIM_SECONDS:        f32 = 90.0;
const SNAPSHOT_TICKS:     u64 = 10; // one snapshot per simulated second
const TRACE_DIR:          &str = "trace_output";

// ── Observer: CSV trace + console summary ─────────────────────────────────────

struct DemoObserver {
    trace:       SimTraceObserver<CsvTraceWriter>,
    transitions: usize,
    spotted:     usize,
    noises:      usize,
}

impl SimObserver for DemoObserver {
    fn on_noise(&mut self, tick: Tick, event: &NoiseEvent) {
        self.noises += 1;
        self.trace.on_noise(tick, event);
    }

    fn on_transition(&mut self, tick: Tick, agent: AgentId, transition: Transition) {
        self.transitions += 1;
        println!(
            "  [{:>6.1}s] guard {} {} -> {} ({})",
            tick.0 as f32 * TICK_DURATION_SECS,
            agent.0,
            transition.from,
            transition.to,
            transition.cause,
        );
        self.trace.on_transition(tick, agent, transition);
    }

    fn on_candidate_spotted(&mut self, tick: Tick, agent: AgentId, candidate: EntityId) {
        self.spotted += 1;
        self.trace.on_candidate_spotted(tick, agent, candidate);
    }

    fn on_snapshot(&mut self, tick: Tick, roster: &AgentRoster) {
        self.trace.on_snapshot(tick, roster);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.trace.on_sim_end(final_tick);
    }
}

// ── Player script ─────────────────────────────────────────────────────────────

/// Three acts: sneak south along the west wall, wander the halls at a walk,
/// then sprint for the doorway.  The wander direction carries a little
/// seeded jitter so the route (and therefore the guards' reactions) is
/// interesting but reproducible.
fn player_input(tick: Tick, rng: &mut SmallRng) -> PlayerInput {
    let t = tick.0 as f32 * TICK_DURATION_SECS;
    let jitter = Vec2::new(rng.gen_range(-0.3..0.3), rng.gen_range(-0.3..0.3));

    let (direction, locomotion) = if t < 30.0 {
        (Vec2::new(0.2, 1.0), Locomotion::Sneaking)
    } else if t < 60.0 {
        (Vec2::new(1.0, 0.1) + jitter, Locomotion::Walking)
    } else {
        (Vec2::new(1.0, -0.4) + jitter, Locomotion::Running)
    };

    PlayerInput { direction, locomotion }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig {
        tick_duration_secs:      TICK_DURATION_SECS,
        total_ticks:             (SIM_SECONDS / TICK_DURATION_SECS) as u64,
        seed:                    SEED,
        snapshot_interval_ticks: SNAPSHOT_TICKS,
    };

    let routes = load_routes_reader(Cursor::new(level::ROUTES_CSV), level::GUARD_COUNT)?;

    let mut sim = SimBuilder::new(
        config.clone(),
        Player::new(EntityId::INVALID, level::PLAYER_SPAWN),
        DirectPathfinder::new(),
        level::build_walls(),
    )
    .agents(level::guard_spawns())
    .routes(routes)
    .build()?;

    std::fs::create_dir_all(TRACE_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(TRACE_DIR))?;
    let mut observer = DemoObserver {
        trace:       SimTraceObserver::new(writer),
        transitions: 0,
        spotted:     0,
        noises:      0,
    };

    println!(
        "manor: {} guards, {:.0}s at {:.0} Hz, seed {}",
        level::GUARD_COUNT,
        SIM_SECONDS,
        1.0 / TICK_DURATION_SECS,
        SEED,
    );

    let started = Instant::now();
    let mut rng = SmallRng::seed_from_u64(SEED);
    sim.run_with(|tick| player_input(tick, &mut rng), &mut observer);
    let elapsed = started.elapsed();

    if let Some(e) = observer.trace.take_error() {
        eprintln!("trace error: {e}");
    }

    println!("\n─ summary ─");
    println!("  simulated {} ticks in {elapsed:.2?}", config.total_ticks);
    println!("  noise events:    {}", observer.noises);
    println!("  transitions:     {}", observer.transitions);
    println!("  player spotted:  {}x", observer.spotted);
    for agent in 0..level::GUARD_COUNT as u32 {
        let id = AgentId(agent);
        println!(
            "  guard {} finished {} at {}",
            agent,
            sim.roster.mode(id),
            sim.roster.positions[id.index()],
        );
    }
    println!("  traces in ./{TRACE_DIR}/");

    Ok(())
}
