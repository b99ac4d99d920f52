//! `ReadyQueue` — which firefighter acts next.
//!
//! A min-heap of `(ready_at, agent)` pairs.  The earliest `ready_at` pops
//! first; equal times pop in ascending `AgentId` order, so a run is fully
//! determined by its inputs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rescue_core::{AgentId, Tick};

#[derive(Default, Debug)]
pub struct ReadyQueue {
    heap: BinaryHeap<Reverse<(Tick, AgentId)>>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `agent` as free to act again at `tick`.
    pub fn push(&mut self, tick: Tick, agent: AgentId) {
        self.heap.push(Reverse((tick, agent)));
    }

    /// Remove and return the earliest-ready agent.
    pub fn pop(&mut self) -> Option<(Tick, AgentId)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// The earliest tick at which some agent is ready, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.heap.peek().map(|Reverse((tick, _))| *tick)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
