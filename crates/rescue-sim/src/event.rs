//! The per-step event log.
//!
//! Every location a strategy visits produces one or more [`StepEvent`]s.
//! Together they are enough for a renderer to replay a run without
//! re-deriving any scheduling decision.

use std::fmt;

use rescue_core::{AgentId, Tick};

/// What a firefighter did at a location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Passed through or claimed a location with nothing to do.
    Visit,
    Explore,
    /// Carried a room's occupants to an exit.
    Rescue,
    /// Handed carried occupants over at an exit.
    Unload,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Visit   => "visit",
            Action::Explore => "explore",
            Action::Rescue  => "rescue",
            Action::Unload  => "unload",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduler step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepEvent {
    pub agent:    AgentId,
    /// When the step started.
    pub at:       Tick,
    /// The location the step was about (the room, for explore and rescue).
    pub location: String,
    pub action:   Action,
    pub ticks:    u64,
    /// Labels walked, in order.  A single label when nobody moved.
    pub path:     Vec<String>,
}

impl StepEvent {
    /// When the step finished.
    pub fn end(&self) -> Tick {
        self.at + self.ticks
    }
}
