//! `SimTraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use st_agent::Transition;
use st_core::{AgentId, Tick};
use st_sim::{AgentRoster, SimObserver};

use crate::row::{AgentSnapshotRow, TransitionRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`SimObserver`] that writes transitions and snapshots to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run completes, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimTraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> SimTraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for SimTraceObserver<W> {
    fn on_transition(&mut self, tick: Tick, agent: AgentId, transition: Transition) {
        let row = TransitionRow {
            tick:     tick.0,
            agent_id: agent.0,
            from:     transition.from.as_str(),
            to:       transition.to.as_str(),
            cause:    transition.cause.as_str(),
        };
        let result = self.writer.write_transitions(&[row]);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, roster: &AgentRoster) {
        let rows: Vec<AgentSnapshotRow> = roster
            .agent_ids()
            .filter(|&agent| roster.is_alive(agent))
            .map(|agent| {
                let i = agent.index();
                AgentSnapshotRow {
                    tick:     tick.0,
                    agent_id: agent.0,
                    x:        roster.positions[i].x,
                    y:        roster.positions[i].y,
                    mode:     roster.states[i].mode.as_str(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
