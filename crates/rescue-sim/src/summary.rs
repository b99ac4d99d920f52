//! What a finished run reports.

use std::fmt;

use rescue_core::{AgentId, Tick};

/// Which strategy produced a [`RunSummary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sweep,
    Dispatch,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Sweep    => "sweep",
            Strategy::Dispatch => "dispatch",
        })
    }
}

/// Per-firefighter totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentSummary {
    pub agent:     AgentId,
    pub start:     String,
    /// Time of the agent's last explore or rescue (zero if it never did one).
    pub finish:    Tick,
    pub explored:  usize,
    pub rescued:   usize,
    /// Occupants handed over at exits.
    pub delivered: usize,
}

/// Result of [`Rescue::sweep`][crate::Rescue::sweep] or
/// [`Rescue::dispatch`][crate::Rescue::dispatch].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub strategy:   Strategy,
    /// Sum of all operation times for a sweep; makespan for a dispatch.
    pub total:      Tick,
    pub agents:     Vec<AgentSummary>,
    /// Distinct locations visited (sweep) or claimed (dispatch).
    pub visited:    usize,
    /// Rooms still `unknown` or `waiting` at the end, e.g. unreachable ones.
    pub unresolved: Vec<String>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}
