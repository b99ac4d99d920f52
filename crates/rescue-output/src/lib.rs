//! `rescue-output` — event log writers and plain-text reports.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                  |
//! |-----------|---------|------------------------------------------------|
//! | *(none)*  | CSV     | `rescue_events.csv`, `agent_summaries.csv`     |
//! | `sqlite`  | SQLite  | `rescue.db`                                    |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`RescueOutputObserver`], which implements `rescue_sim::RescueObserver`.
//!
//! The [`report`] module renders the building and the distance matrix as
//! text for terminals and logs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rescue_output::{CsvWriter, RescueOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RescueOutputObserver::new(writer);
//! rescue.dispatch(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RescueOutputObserver;
pub use report::{DistanceMatrix, GraphSummary};
pub use row::{AgentSummaryRow, EventRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
