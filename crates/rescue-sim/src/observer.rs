//! Observer trait for collecting the event log.

use crate::{RunSummary, StepEvent};

/// Callbacks invoked by [`Rescue::sweep`][crate::Rescue::sweep] and
/// [`Rescue::dispatch`][crate::Rescue::dispatch].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl RescueObserver for Printer {
///     fn on_event(&mut self, event: &StepEvent) {
///         println!("{} {} {} in {}", event.agent, event.action, event.location, event.ticks);
///     }
/// }
/// ```
pub trait RescueObserver {
    /// Called after every scheduler step, in execution order.
    fn on_event(&mut self, _event: &StepEvent) {}

    /// Called once when the strategy finishes.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`RescueObserver`] that does nothing.
pub struct NoopObserver;

impl RescueObserver for NoopObserver {}

/// Keeps every event in memory.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<StepEvent>,
}

impl EventLog {
    /// Total ticks across all logged steps.
    pub fn total_ticks(&self) -> u64 {
        self.events.iter().map(|e| e.ticks).sum()
    }
}

impl RescueObserver for EventLog {
    fn on_event(&mut self, event: &StepEvent) {
        self.events.push(event.clone());
    }
}

impl<A: RescueObserver, B: RescueObserver> RescueObserver for (A, B) {
    fn on_event(&mut self, event: &StepEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.0.on_run_end(summary);
        self.1.on_run_end(summary);
    }
}
