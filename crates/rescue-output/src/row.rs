//! Plain data row types written by output backends.

use rescue_sim::{RunSummary, StepEvent};

/// One scheduler step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Position in the run's event stream, from 0.
    pub seq:        u64,
    pub agent_id:   u32,
    pub start_tick: u64,
    pub end_tick:   u64,
    pub action:     &'static str,
    pub location:   String,
    /// Labels walked, joined with `" -> "`.
    pub path:       String,
}

impl EventRow {
    pub fn from_event(seq: u64, event: &StepEvent) -> Self {
        Self {
            seq,
            agent_id:   event.agent.0,
            start_tick: event.at.0,
            end_tick:   event.end().0,
            action:     event.action.as_str(),
            location:   event.location.clone(),
            path:       event.path.join(" -> "),
        }
    }
}

/// Final totals for one firefighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSummaryRow {
    pub strategy:    String,
    pub agent_id:    u32,
    pub start:       String,
    pub finish_tick: u64,
    pub explored:    u64,
    pub rescued:     u64,
    pub delivered:   u64,
}

impl AgentSummaryRow {
    /// One row per agent in `summary`.
    pub fn from_summary(summary: &RunSummary) -> Vec<Self> {
        summary
            .agents
            .iter()
            .map(|a| Self {
                strategy:    summary.strategy.to_string(),
                agent_id:    a.agent.0,
                start:       a.start.clone(),
                finish_tick: a.finish.0,
                explored:    a.explored as u64,
                rescued:     a.rescued as u64,
                delivered:   a.delivered as u64,
            })
            .collect()
    }
}
