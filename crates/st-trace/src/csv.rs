//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `transitions.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentSnapshotRow, TraceResult, TransitionRow};

/// Writes behavior traces to two CSV files.
pub struct CsvTraceWriter {
    transitions: Writer<File>,
    snapshots:   Writer<File>,
    finished:    bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut transitions = Writer::from_path(dir.join("transitions.csv"))?;
        transitions.write_record(["tick", "agent_id", "from", "to", "cause"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["tick", "agent_id", "x", "y", "mode"])?;

        Ok(Self {
            transitions,
            snapshots,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_transitions(&mut self, rows: &[TransitionRow]) -> TraceResult<()> {
        for row in rows {
            self.transitions.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.from.to_string(),
                row.to.to_string(),
                row.cause.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.mode.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transitions.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
