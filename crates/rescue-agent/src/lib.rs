//! `rescue-agent` — firefighters and the world they act on.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`world`]       | `World` — building graph + path oracle for one session   |
//! | [`firefighter`] | `Firefighter` — placement, movement, explore, rescue     |
//! | [`outcome`]     | `Outcome` — elapsed ticks and label path of an operation |
//!
//! # Fail-soft contract
//!
//! Firefighter operations never return errors.  A request that cannot
//! proceed (unknown label, unreachable target, room in the wrong state,
//! agent not yet placed) yields an [`Outcome`] with zero ticks whose path is
//! just the agent's current label, and leaves all state unchanged.  The
//! reason is logged at `warn` level; the scheduler decides what to do next.

pub mod firefighter;
pub mod outcome;
pub mod world;

#[cfg(test)]
mod tests;

pub use firefighter::Firefighter;
pub use outcome::Outcome;
pub use world::World;
