//! `st-trace` — behavior trace writers for the rust_stealth framework.
//!
//! Records what the AI did — every transition with its cause, plus periodic
//! position/mode snapshots — to CSV files:
//!
//! | File                  | One row per                                  |
//! |-----------------------|----------------------------------------------|
//! | `transitions.csv`     | behavior transition (tick, agent, from, to, cause) |
//! | `agent_snapshots.csv` | living agent per snapshot tick (tick, agent, x, y, mode) |
//!
//! The backend sits behind [`TraceWriter`] and is driven by
//! [`SimTraceObserver`], which implements `st_sim::SimObserver`.
//!
//! This is observability, not persistence: nothing here is ever read back by
//! the simulation.  Trace files feed balancing, debugging, and the test
//! suite.
//!
//! # Usage
//!
//! ```rust,ignore
//! use st_trace::{CsvTraceWriter, SimTraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace")).unwrap();
//! let mut obs = SimTraceObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::SimTraceObserver;
pub use row::{AgentSnapshotRow, TransitionRow};
pub use writer::TraceWriter;
