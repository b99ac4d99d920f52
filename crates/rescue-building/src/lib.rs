//! `rescue-building` — the building as data: locations, rooms, and the
//! weighted topology that connects them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`location`] | `Location`, `LocationKind`, `RoomAttrs`, `RoomState`, `Occupant` |
//! | [`graph`]    | `BuildingGraph` — undirected weighted adjacency + registry   |
//! | [`doors`]    | `link_quadrant_doors` — office-to-hallway wiring rule        |
//! | [`loader`]   | `load_building_json`, `load_building_reader`                 |
//! | [`error`]    | `BuildingError`, `BuildingResult<T>`                         |
//!
//! # Room state machine (summary)
//!
//! ```text
//! unknown --explore(no occupants)--> safe
//! unknown --explore(occupants)-----> waiting --evacuate--> safe
//! ```
//!
//! Exits and hallways are `not_applicable` forever.  No transition moves a
//! room backwards.

pub mod doors;
pub mod error;
pub mod graph;
pub mod loader;
pub mod location;


pub use doors::{QUADRANT_DOORS, link_quadrant_doors};
pub use error::{BuildingError, BuildingResult};
pub use graph::{BuildingGraph, Edge};
pub use loader::{load_building_json, load_building_reader};
pub use location::{Location, LocationKind, Occupant, Occupants, RoomAttrs, RoomState};
