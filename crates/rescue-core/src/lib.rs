//! `rescue-core` — foundational types for the building rescue simulator.
//!
//! This crate is a dependency of every other `rescue-*` crate.  It has no
//! `rescue-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `LocationId`, `AgentId`, `OccupantId`                 |
//! | [`time`]   | `Tick`, `travel_ticks`                                |
//! | [`config`] | `RescueConfig`                                        |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RescueConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, LocationId, OccupantId};
pub use time::{Tick, travel_ticks};
