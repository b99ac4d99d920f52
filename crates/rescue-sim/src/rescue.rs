//! The `Rescue` session and its two strategies.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use rescue_agent::{Firefighter, Outcome, World};
use rescue_building::RoomState;
use rescue_core::{AgentId, LocationId, Tick};

use crate::{
    Action, AgentSummary, ReadyQueue, RescueObserver, RunSummary, StepEvent, Strategy,
};

// ── Per-agent bookkeeping ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Default)]
struct Tally {
    finish:   Tick,
    explored: usize,
    rescued:  usize,
}

// ── Rescue ────────────────────────────────────────────────────────────────────

/// A building, its firefighters, and where each of them started.
///
/// Both strategies mutate room states and occupant maps in place, so each
/// session should run exactly one strategy.  Create via
/// [`RescueBuilder`][crate::RescueBuilder].
pub struct Rescue {
    pub world:  World,
    pub agents: Vec<Firefighter>,
    pub(crate) starts: Vec<LocationId>,
}

impl Rescue {
    /// Start location of each agent, indexed by `AgentId`.
    pub fn starts(&self) -> &[LocationId] {
        &self.starts
    }

    // ── Strategies ────────────────────────────────────────────────────────

    /// Two-phase sweep by agent 0: BFS discovery with exploration, then one
    /// rescue per waiting room in discovery order.
    ///
    /// Locations unreachable from the start are never visited.
    pub fn sweep<O: RescueObserver>(&mut self, observer: &mut O) -> RunSummary {
        let mut tallies = vec![Tally::default(); self.agents.len()];
        let start = self.starts[0];
        let Self { world, agents, .. } = self;
        let agent = &mut agents[0];
        let tally = &mut tallies[0];
        let mut clock = Tick::ZERO;

        // ── Phase 1: discovery ────────────────────────────────────────────
        let mut queue = VecDeque::from([start]);
        let mut seen = FxHashSet::default();
        seen.insert(start);
        let mut waiting = Vec::new();

        while let Some(idx) = queue.pop_front() {
            let label = label_of(world, idx);
            if state_of(world, idx) == RoomState::Unknown {
                clock = explore(world, agent, tally, observer, clock, &label);
            } else {
                visit(observer, agent.id, clock, &label);
            }
            if state_of(world, idx) == RoomState::Waiting {
                waiting.push(label);
            }
            if let Ok(neighbors) = world.graph.neighbors(idx) {
                for n in neighbors {
                    if seen.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
        }
        debug!(visited = seen.len(), waiting = waiting.len(), %clock, "sweep discovery done");

        // ── Phase 2: rescue ───────────────────────────────────────────────
        for room in &waiting {
            clock = rescue(world, agent, tally, observer, clock, room);
        }

        let summary = self.summarize(Strategy::Sweep, clock, &tallies, seen.len());
        observer.on_run_end(&summary);
        summary
    }

    /// Greedy multi-agent dispatch driven by a [`ReadyQueue`].
    ///
    /// Stops once every room is settled, or when no agent can claim
    /// anything more.  The reported total is the makespan.
    pub fn dispatch<O: RescueObserver>(&mut self, observer: &mut O) -> RunSummary {
        let Self { world, agents, starts } = self;
        let mut queues: Vec<VecDeque<LocationId>> =
            starts.iter().map(|&s| VecDeque::from([s])).collect();
        let mut tallies = vec![Tally::default(); agents.len()];
        let mut claimed = FxHashSet::default();

        let mut ready = ReadyQueue::new();
        for agent in agents.iter() {
            ready.push(Tick::ZERO, agent.id);
        }

        while !world.graph.all_rooms_settled() {
            let Some((now, id)) = ready.pop() else { break };
            let i = id.index();

            let Some(target) = next_target(&mut queues[i], &claimed, world.graph.len()) else {
                debug!(agent = id.0, %now, "nothing left to claim");
                continue;
            };
            claimed.insert(target);
            if let Ok(neighbors) = world.graph.neighbors(target) {
                queues[i].extend(neighbors.filter(|n| !claimed.contains(n)));
            }

            let label = label_of(world, target);
            let agent = &mut agents[i];
            let tally = &mut tallies[i];
            let mut clock = now;
            let mut acted = false;

            if state_of(world, target) == RoomState::Unknown {
                clock = explore(world, agent, tally, observer, clock, &label);
                acted = true;
            }
            if state_of(world, target) == RoomState::Waiting {
                clock = rescue(world, agent, tally, observer, clock, &label);
                acted = true;
            }
            if !acted {
                visit(observer, id, clock, &label);
            }
            ready.push(clock, id);
        }

        let makespan = tallies.iter().map(|t| t.finish).max().unwrap_or_default();
        let summary = self.summarize(Strategy::Dispatch, makespan, &tallies, claimed.len());
        observer.on_run_end(&summary);
        summary
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn summarize(
        &self,
        strategy: Strategy,
        total:    Tick,
        tallies:  &[Tally],
        visited:  usize,
    ) -> RunSummary {
        let agents = self
            .agents
            .iter()
            .zip(tallies)
            .zip(&self.starts)
            .map(|((agent, tally), &start)| AgentSummary {
                agent:     agent.id,
                start:     label_of(&self.world, start),
                finish:    tally.finish,
                explored:  tally.explored,
                rescued:   tally.rescued,
                delivered: agent.delivered(),
            })
            .collect();
        let unresolved: Vec<String> = self
            .world
            .graph
            .iter()
            .filter(|(_, loc)| !loc.state().is_settled())
            .map(|(_, loc)| loc.label.clone())
            .collect();

        info!(%strategy, %total, visited, unresolved = unresolved.len(), "rescue finished");
        RunSummary { strategy, total, agents, visited, unresolved }
    }
}

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Pop the agent's next unclaimed location, or steal the lowest-index
/// unclaimed location when its own queue runs dry.
fn next_target(
    queue:   &mut VecDeque<LocationId>,
    claimed: &FxHashSet<LocationId>,
    len:     usize,
) -> Option<LocationId> {
    while let Some(candidate) = queue.pop_front() {
        if !claimed.contains(&candidate) {
            return Some(candidate);
        }
    }
    (0..len as u32).map(LocationId).find(|id| !claimed.contains(id))
}

fn explore<O: RescueObserver>(
    world:    &mut World,
    agent:    &mut Firefighter,
    tally:    &mut Tally,
    observer: &mut O,
    at:       Tick,
    room:     &str,
) -> Tick {
    let outcome = agent.explore_room(world, room);
    if world.resolve(room).is_some_and(|id| state_of(world, id) != RoomState::Unknown) {
        tally.explored += 1;
    }
    let end = emit(observer, agent.id, at, room, Action::Explore, outcome);
    tally.finish = end;
    end
}

/// Rescue `room` to its nearest exit and unload there.
fn rescue<O: RescueObserver>(
    world:    &mut World,
    agent:    &mut Firefighter,
    tally:    &mut Tally,
    observer: &mut O,
    at:       Tick,
    room:     &str,
) -> Tick {
    let outcome = agent.rescue_room_to_nearest_exit(world, room);
    if world.resolve(room).is_some_and(|id| state_of(world, id) == RoomState::Safe) {
        tally.rescued += 1;
    }
    let end = emit(observer, agent.id, at, room, Action::Rescue, outcome);

    let before = agent.delivered();
    let unloaded = agent.unload(world);
    if agent.delivered() > before {
        let exit = unloaded.path.first().cloned().unwrap_or_default();
        emit(observer, agent.id, end, &exit, Action::Unload, unloaded);
    }
    tally.finish = end;
    end
}

fn visit<O: RescueObserver>(observer: &mut O, agent: AgentId, at: Tick, label: &str) {
    emit(observer, agent, at, label, Action::Visit, Outcome::stay(Some(label)));
}

fn emit<O: RescueObserver>(
    observer: &mut O,
    agent:    AgentId,
    at:       Tick,
    location: &str,
    action:   Action,
    outcome:  Outcome,
) -> Tick {
    let event = StepEvent {
        agent,
        at,
        location: location.to_owned(),
        action,
        ticks: outcome.ticks,
        path: outcome.path,
    };
    debug!(
        agent = agent.0,
        %at,
        location,
        %action,
        ticks = event.ticks,
        path = %event.path.join(" -> "),
        "step"
    );
    observer.on_event(&event);
    event.end()
}

// ── World lookups ─────────────────────────────────────────────────────────────

fn label_of(world: &World, id: LocationId) -> String {
    world.label(id).map(str::to_owned).unwrap_or_else(|| id.index().to_string())
}

fn state_of(world: &World, id: LocationId) -> RoomState {
    world.location(id).map_or(RoomState::NotApplicable, |loc| loc.state())
}
