//! `rescue-routing` — the path oracle.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`oracle`] | `PathOracle` (Floyd–Warshall + next hop), `Route`, `ExitRoute` |
//! | [`error`]  | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Relaxes matrix rows on Rayon's thread pool.             |

pub mod error;
pub mod oracle;


pub use error::{RoutingError, RoutingResult};
pub use oracle::{ExitRoute, PathOracle, Route};
