//! Integration tests for st-trace.

use std::path::Path;

use st_agent::PatrolRoute;
use st_core::{EntityId, SimConfig, Vec2};
use st_events::NoiseEvent;
use st_player::Player;
use st_sim::SimBuilder;
use st_world::{DirectPathfinder, OpenField};

use crate::{AgentSnapshotRow, CsvTraceWriter, SimTraceObserver, TraceWriter, TransitionRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

const P0: Vec2 = Vec2 { x: 0.0, y: 0.0 };
const P1: Vec2 = Vec2 { x: 100.0, y: 0.0 };

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn small_sim(
    total_ticks: u64,
    snapshot_interval: u64,
) -> st_sim::Sim<DirectPathfinder, OpenField> {
    let config = SimConfig {
        tick_duration_secs:      0.5,
        total_ticks,
        seed:                    1,
        snapshot_interval_ticks: snapshot_interval,
    };
    SimBuilder::new(
        config,
        Player::new(EntityId::INVALID, Vec2::new(10_000.0, 10_000.0)),
        DirectPathfinder::new(),
        OpenField,
    )
    .agents(vec![P0])
    .routes(vec![PatrolRoute::new(vec![P0, P1], true)])
    .build()
    .unwrap()
}

// ── CsvTraceWriter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn creates_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvTraceWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        let transitions = read_lines(&dir.path().join("transitions.csv"));
        assert_eq!(transitions, vec!["tick,agent_id,from,to,cause"]);
        let snapshots = read_lines(&dir.path().join("agent_snapshots.csv"));
        assert_eq!(snapshots, vec!["tick,agent_id,x,y,mode"]);
    }

    #[test]
    fn writes_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvTraceWriter::new(dir.path()).unwrap();
        writer
            .write_transitions(&[
                TransitionRow {
                    tick: 3,
                    agent_id: 0,
                    from: "patrol",
                    to: "alert",
                    cause: "noise",
                },
                TransitionRow {
                    tick: 9,
                    agent_id: 1,
                    from: "alert",
                    to: "patrol",
                    cause: "alert_expired",
                },
            ])
            .unwrap();
        writer
            .write_snapshots(&[AgentSnapshotRow {
                tick: 3,
                agent_id: 0,
                x: 1.5,
                y: -2.0,
                mode: "alert",
            }])
            .unwrap();
        writer.finish().unwrap();

        let transitions = read_lines(&dir.path().join("transitions.csv"));
        assert_eq!(transitions[1], "3,0,patrol,alert,noise");
        assert_eq!(transitions[2], "9,1,alert,patrol,alert_expired");
        let snapshots = read_lines(&dir.path().join("agent_snapshots.csv"));
        assert_eq!(snapshots[1], "3,0,1.5,-2,alert");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvTraceWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

// ── SimTraceObserver end-to-end ───────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use st_sim::SimObserver;

    use super::*;

    #[test]
    fn records_a_noise_alert_and_its_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimTraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());

        let mut sim = small_sim(10, 0);
        sim.emit_noise(NoiseEvent::new(P0, 50.0, None), &mut obs);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let lines = read_lines(&dir.path().join("transitions.csv"));
        // Header, the noise alert, and the expiry back to patrol.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,0,patrol,alert,noise");
        // 3.0 s at 0.5 s/tick: the expiry lands on tick 5.
        assert_eq!(lines[2], "5,0,alert,patrol,alert_expired");
    }

    #[test]
    fn snapshots_follow_the_interval_and_carry_modes() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimTraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());

        let mut sim = small_sim(5, 2);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let lines = read_lines(&dir.path().join("agent_snapshots.csv"));
        // Header + ticks 0, 2, 4 for the single agent.
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,0,"));
        assert!(lines[2].starts_with("2,0,"));
        assert!(lines[3].starts_with("4,0,"));
        assert!(lines.iter().skip(1).all(|l| l.ends_with(",patrol")));
    }

    #[test]
    fn despawned_agents_drop_out_of_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimTraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());

        let mut sim = small_sim(4, 1);
        sim.run_ticks(2, &mut obs);
        sim.despawn_agent(st_core::AgentId(0));
        sim.run_ticks(2, &mut obs);
        obs.on_sim_end(sim.clock.current_tick);
        assert!(obs.take_error().is_none());

        let lines = read_lines(&dir.path().join("agent_snapshots.csv"));
        // Header + ticks 0 and 1 only; dead agents produce no rows.
        assert_eq!(lines.len(), 3);
    }
}
