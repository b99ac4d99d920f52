//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSummaryRow, EventRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`RescueOutputObserver::take_error`][crate::RescueOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of step events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write the per-agent totals of a finished run.
    fn write_agent_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
