//! Building-subsystem error type.

use thiserror::Error;

use rescue_core::LocationId;

use crate::RoomState;

/// Errors produced by `rescue-building`.
#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("location index {index} out of bounds (graph has {len} locations)")]
    IndexOutOfBounds { index: LocationId, len: usize },

    #[error("location is not part of this graph")]
    LocationNotFound,

    #[error("location '{0}' is not a room")]
    NotARoom(String),

    #[error("room '{label}' cannot {action} while {from}")]
    InvalidTransition {
        label:  String,
        from:   RoomState,
        action: &'static str,
    },

    #[error("floor parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BuildingResult<T> = Result<T, BuildingError>;
