//! Fluent builder for constructing a [`Rescue`] session.

use rescue_agent::{Firefighter, World};
use rescue_core::{AgentId, LocationId, RescueConfig};

use crate::{Rescue, SimError, SimResult};

/// Fluent builder for [`Rescue`].
///
/// # Required inputs
///
/// - [`RescueConfig`] — agent count, base velocity, optional start labels
/// - [`World`] — the loaded building and its path oracle
///
/// # Start locations
///
/// | `config.start_labels` | Agent `i` starts at                         |
/// |-----------------------|---------------------------------------------|
/// | empty                 | exit number `i % exit_count` in index order |
/// | one label per agent   | that label                                  |
///
/// # Example
///
/// ```rust,ignore
/// let config = RescueConfig::new(1, 5).with_start_labels(["EXIT_R"]);
/// let mut rescue = RescueBuilder::new(config, world).build()?;
/// let summary = rescue.sweep(&mut NoopObserver);
/// ```
pub struct RescueBuilder {
    config: RescueConfig,
    world:  World,
}

impl RescueBuilder {
    pub fn new(config: RescueConfig, world: World) -> Self {
        Self { config, world }
    }

    /// Validate the configuration, resolve start locations and place every
    /// firefighter.
    pub fn build(self) -> SimResult<Rescue> {
        let Self { config, world } = self;
        let count = config.agent_count;

        if count == 0 {
            return Err(SimError::NoAgents);
        }
        if !config.start_labels.is_empty() && config.start_labels.len() != count {
            return Err(SimError::AgentCountMismatch {
                expected: count,
                got:      config.start_labels.len(),
                what:     "start labels",
            });
        }
        config.validate()?;

        // ── Resolve start locations ───────────────────────────────────────
        let starts: Vec<LocationId> = if config.start_labels.is_empty() {
            let exits = world.oracle.exits();
            if exits.is_empty() {
                return Err(SimError::NoExits);
            }
            (0..count).map(|i| exits[i % exits.len()]).collect()
        } else {
            config
                .start_labels
                .iter()
                .map(|label| {
                    world
                        .resolve(label)
                        .ok_or_else(|| SimError::UnknownStart(label.clone()))
                })
                .collect::<SimResult<_>>()?
        };

        // ── Place firefighters ────────────────────────────────────────────
        let labels = world.oracle.labels();
        let agents = starts
            .iter()
            .enumerate()
            .map(|(i, start)| {
                let mut ff = Firefighter::new(AgentId(i as u32), config.base_velocity);
                ff.place(&world, &labels[start.index()]);
                ff
            })
            .collect();

        Ok(Rescue { world, agents, starts })
    }
}
