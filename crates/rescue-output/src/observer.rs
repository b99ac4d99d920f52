//! `RescueOutputObserver<W>` — bridges `RescueObserver` to an `OutputWriter`.

use rescue_sim::{RescueObserver, RunSummary, StepEvent};

use crate::row::{AgentSummaryRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RescueObserver`] that writes every step and the final per-agent
/// totals to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RescueObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct RescueOutputObserver<W: OutputWriter> {
    writer:     W,
    next_seq:   u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RescueOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq:   0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RescueObserver for RescueOutputObserver<W> {
    fn on_event(&mut self, event: &StepEvent) {
        let row = EventRow::from_event(self.next_seq, event);
        self.next_seq += 1;
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let rows = AgentSummaryRow::from_summary(summary);
        let result = self.writer.write_agent_summaries(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
