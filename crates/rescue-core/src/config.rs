//! Top-level session configuration.

use crate::{CoreError, CoreResult};

/// How many firefighters take part, how fast they are, and where they start.
///
/// Typically built in code by the application crate (or deserialized with
/// the `serde` feature) and passed to `rescue_sim::RescueBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescueConfig {
    /// Number of firefighters.  The sweep strategy only uses agent 0.
    pub agent_count: usize,

    /// Unloaded speed of every firefighter, in distance units per tick.
    pub base_velocity: u32,

    /// Explicit start label per agent.  When empty, agent `i` starts at the
    /// `i mod exit_count`-th exit in index order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_labels: Vec<String>,
}

impl RescueConfig {
    /// `count` agents at `base_velocity`, starting at the exits.
    pub fn new(agent_count: usize, base_velocity: u32) -> Self {
        Self {
            agent_count,
            base_velocity,
            start_labels: Vec::new(),
        }
    }

    /// Pin agent starts to explicit labels (one per agent).
    pub fn with_start_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.start_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Reject configurations that can never make progress.
    pub fn validate(&self) -> CoreResult<()> {
        if self.agent_count == 0 {
            return Err(CoreError::Config("agent_count must be at least 1".into()));
        }
        if self.base_velocity == 0 {
            return Err(CoreError::Config("base_velocity must be positive".into()));
        }
        if !self.start_labels.is_empty() && self.start_labels.len() != self.agent_count {
            return Err(CoreError::Config(format!(
                "{} start labels given for {} agents",
                self.start_labels.len(),
                self.agent_count
            )));
        }
        Ok(())
    }
}

impl Default for RescueConfig {
    /// A single firefighter at velocity 5, matching the reference floor runs.
    fn default() -> Self {
        Self::new(1, 5)
    }
}
