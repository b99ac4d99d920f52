//! `rescue-sim` — drives firefighters through a building until every room
//! is settled.
//!
//! # Strategies
//!
//! ```text
//! sweep     (agent 0 only)
//!   ① Discover — BFS from the start; explore every unknown room on the way
//!                and remember the ones left waiting.
//!   ② Rescue   — for each waiting room in discovery order: carry everyone to
//!                the nearest exit, unload.
//!   total = sum of every operation's ticks
//!
//! dispatch  (all agents)
//!   loop while some room is unsettled:
//!     pop (ready_at, agent) with the smallest ready_at (ties: lower id)
//!     claim the next unclaimed location from the agent's own queue, or
//!       steal the first unclaimed location index when the queue is dry
//!     enqueue its unclaimed neighbours on the same agent's queue
//!     unknown room → explore; waiting room → rescue to nearest exit, unload
//!     push (ready_at + elapsed, agent)
//!   makespan = max over agents of the time of their last operation
//! ```
//!
//! A location is claimed when it is dequeued, never when it is enqueued, so
//! two agents may both have it queued but only one ever works on it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rescue_agent::World;
//! use rescue_core::RescueConfig;
//! use rescue_sim::{EventLog, RescueBuilder};
//!
//! let world = World::new(rescue_building::load_building_json("floor.json")?);
//! let mut rescue = RescueBuilder::new(RescueConfig::new(2, 5), world).build()?;
//! let mut log = EventLog::default();
//! let summary = rescue.dispatch(&mut log);
//! println!("makespan: {}", summary.total);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod ready_queue;
pub mod rescue;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::RescueBuilder;
pub use error::{SimError, SimResult};
pub use event::{Action, StepEvent};
pub use observer::{EventLog, NoopObserver, RescueObserver};
pub use ready_queue::ReadyQueue;
pub use rescue::Rescue;
pub use summary::{AgentSummary, RunSummary, Strategy};
