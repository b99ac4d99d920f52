//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `rescue_events.csv`
//! - `agent_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, EventRow, OutputResult};

/// Writes rescue output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("rescue_events.csv"))?;
        events.write_record([
            "seq", "agent_id", "start_tick", "end_tick", "action", "location", "path",
        ])?;

        let mut summaries = Writer::from_path(dir.join("agent_summaries.csv"))?;
        summaries.write_record([
            "strategy", "agent_id", "start", "finish_tick", "explored", "rescued", "delivered",
        ])?;

        Ok(Self {
            events,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.agent_id.to_string(),
                row.start_tick.to_string(),
                row.end_tick.to_string(),
                row.action.to_owned(),
                row.location.clone(),
                row.path.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_agent_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.strategy.clone(),
                row.agent_id.to_string(),
                row.start.clone(),
                row.finish_tick.to_string(),
                row.explored.to_string(),
                row.rescued.to_string(),
                row.delivered.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
