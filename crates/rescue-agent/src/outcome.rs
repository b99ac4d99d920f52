//! Result of a single firefighter operation.

/// Elapsed ticks plus the labels walked, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub ticks: u64,
    pub path:  Vec<String>,
}

impl Outcome {
    /// Zero-progress result at `label` (empty path when there is no label,
    /// i.e. the agent was never placed).
    pub fn stay(label: Option<&str>) -> Self {
        Self {
            ticks: 0,
            path:  label.map(str::to_owned).into_iter().collect(),
        }
    }

    /// `true` when time passed.
    pub fn made_progress(&self) -> bool {
        self.ticks > 0
    }

    /// Append `next`, dropping its first label when it repeats our last one.
    pub fn chain(mut self, next: Outcome) -> Self {
        self.ticks += next.ticks;
        let skip = usize::from(!self.path.is_empty() && self.path.last() == next.path.first());
        self.path.extend(next.path.into_iter().skip(skip));
        self
    }
}
