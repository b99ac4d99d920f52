//! Routing error type.
//!
//! "Label not found" and "no path" are distinct variants so callers can tell
//! a typo from a disconnected floor.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("unknown location label '{0}'")]
    UnknownLabel(String),

    #[error("no path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    #[error("no exit reachable from '{0}'")]
    NoExitReachable(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
