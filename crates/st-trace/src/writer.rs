//! The `TraceWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, TraceResult, TransitionRow};

/// Trait implemented by trace backends (CSV today; anything else an
/// application cares to plug in).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimTraceObserver::take_error`][crate::SimTraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of transition rows.
    fn write_transitions(&mut self, rows: &[TransitionRow]) -> TraceResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
