//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `rescue.db` file in the configured output directory with
//! two tables: `rescue_events` and `agent_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSummaryRow, EventRow, OutputResult};

/// Writes rescue output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `rescue.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("rescue.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS rescue_events (
                 seq        INTEGER PRIMARY KEY,
                 agent_id   INTEGER NOT NULL,
                 start_tick INTEGER NOT NULL,
                 end_tick   INTEGER NOT NULL,
                 action     TEXT    NOT NULL,
                 location   TEXT    NOT NULL,
                 path       TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_summaries (
                 strategy    TEXT    NOT NULL,
                 agent_id    INTEGER NOT NULL,
                 start       TEXT    NOT NULL,
                 finish_tick INTEGER NOT NULL,
                 explored    INTEGER NOT NULL,
                 rescued     INTEGER NOT NULL,
                 delivered   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO rescue_events \
                 (seq, agent_id, start_tick, end_tick, action, location, path) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.seq,
                    row.agent_id,
                    row.start_tick,
                    row.end_tick,
                    row.action,
                    row.location,
                    row.path,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_agent_summaries(&mut self, rows: &[AgentSummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_summaries \
                 (strategy, agent_id, start, finish_tick, explored, rescued, delivered) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.strategy,
                    row.agent_id,
                    row.start,
                    row.finish_tick,
                    row.explored,
                    row.rescued,
                    row.delivered,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
