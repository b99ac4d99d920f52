use rescue_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("rescue configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("a rescue needs at least one firefighter")]
    NoAgents,

    #[error("building has no exits and no explicit start labels were given")]
    NoExits,

    #[error("start location {0:?} is not in the building")]
    UnknownStart(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
