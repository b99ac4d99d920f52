//! Shared error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers
//! configuration problems shared by all of them.

use thiserror::Error;

/// The base error type for `rescue-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rescue-core`.
pub type CoreResult<T> = Result<T, CoreError>;
