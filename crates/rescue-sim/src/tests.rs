//! Unit tests for rescue-sim.

#[cfg(test)]
mod helpers {
    use rescue_agent::World;
    use rescue_building::{BuildingGraph, Location, Occupant, link_quadrant_doors};

    use crate::{Action, EventLog};

    /// The six-office floor.
    ///
    /// ```text
    ///          TL(2)      TM(3)      TR(2)
    ///           |          |          |
    /// EXIT_L -3- H_L --4-- H_M --4-- H_R -3- EXIT_R
    ///           |          |          |
    ///          BL(2)      BM(3)      BR(2)
    /// ```
    ///
    /// Door weights are room sizes (in brackets).  TM holds one occupant,
    /// BM two (velocities 2 and 4), BR one; the rest are empty.
    pub fn office() -> World {
        let mut g = BuildingGraph::new();
        let exit_l = g.add_location(Location::exit("EXIT_L"));
        let exit_r = g.add_location(Location::exit("EXIT_R"));
        let h_l = g.add_location(Location::hallway("H_L"));
        let h_m = g.add_location(Location::hallway("H_M"));
        let h_r = g.add_location(Location::hallway("H_R"));
        g.add_location(Location::room("TL", 2, 1));
        g.add_location(Location::room("TM", 3, 2).with_occupants([Occupant::new(1, 3)]));
        g.add_location(Location::room("TR", 2, 1));
        g.add_location(Location::room("BL", 2, 1));
        g.add_location(
            Location::room("BM", 3, 2).with_occupants([Occupant::new(2, 2), Occupant::new(3, 4)]),
        );
        g.add_location(Location::room("BR", 2, 1).with_occupants([Occupant::new(4, 3)]));
        g.add_edge(exit_l, h_l, 3);
        g.add_edge(h_l, h_m, 4);
        g.add_edge(h_m, h_r, 4);
        g.add_edge(h_r, exit_r, 3);
        assert_eq!(link_quadrant_doors(&mut g), 6);
        World::new(g)
    }

    /// `EXIT(0) --2-- H(1) --3-- R(2)`, R holds one occupant of velocity 1
    /// and takes 4 ticks to search.
    pub fn corridor() -> World {
        let mut g = BuildingGraph::new();
        let e = g.add_location(Location::exit("EXIT"));
        let h = g.add_location(Location::hallway("H"));
        let r = g.add_location(Location::room("R", 3, 4).with_occupants([Occupant::new(1, 1)]));
        g.add_edge(e, h, 2);
        g.add_edge(h, r, 3);
        World::new(g)
    }

    /// `E_A(0) --5-- R(1) --5-- E_B(2)`, R empty with explore time 2.
    pub fn twin_exits() -> World {
        let mut g = BuildingGraph::new();
        let a = g.add_location(Location::exit("E_A"));
        let r = g.add_location(Location::room("R", 1, 2));
        let b = g.add_location(Location::exit("E_B"));
        g.add_edge(a, r, 5);
        g.add_edge(r, b, 5);
        World::new(g)
    }

    /// Adds an occupied room with no doors.
    pub fn with_sealed_room(world: World) -> World {
        let mut g = world.graph;
        g.add_location(Location::room("SEALED", 1, 1).with_occupants([Occupant::new(99, 1)]));
        World::new(g)
    }

    pub fn labels_for(log: &EventLog, action: Action) -> Vec<&str> {
        log.events
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.location.as_str())
            .collect()
    }
}

// ── ReadyQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ready_queue {
    use crate::ReadyQueue;
    use rescue_core::{AgentId, Tick};

    #[test]
    fn earliest_first() {
        let mut q = ReadyQueue::new();
        q.push(Tick(9), AgentId(0));
        q.push(Tick(3), AgentId(1));
        q.push(Tick(5), AgentId(2));
        assert_eq!(q.len(), 3);
        assert_eq!(q.next_tick(), Some(Tick(3)));
        assert_eq!(q.pop(), Some((Tick(3), AgentId(1))));
        assert_eq!(q.pop(), Some((Tick(5), AgentId(2))));
        assert_eq!(q.pop(), Some((Tick(9), AgentId(0))));
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ties_go_to_lower_agent_id() {
        let mut q = ReadyQueue::new();
        q.push(Tick(4), AgentId(2));
        q.push(Tick(4), AgentId(0));
        q.push(Tick(4), AgentId(1));
        assert_eq!(q.pop(), Some((Tick(4), AgentId(0))));
        assert_eq!(q.pop(), Some((Tick(4), AgentId(1))));
        assert_eq!(q.pop(), Some((Tick(4), AgentId(2))));
    }
}

// ── RescueBuilder validation ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::helpers::{office, twin_exits};
    use crate::{RescueBuilder, SimError};
    use rescue_agent::World;
    use rescue_building::{BuildingGraph, Location};
    use rescue_core::RescueConfig;

    #[test]
    fn default_starts_cycle_through_exits() {
        let rescue = RescueBuilder::new(RescueConfig::new(3, 5), office()).build().unwrap();
        let w = &rescue.world;
        let starts: Vec<_> = rescue.starts().iter().map(|&s| w.label(s).unwrap()).collect();
        assert_eq!(starts, ["EXIT_L", "EXIT_R", "EXIT_L"]);
        for (agent, &start) in rescue.agents.iter().zip(rescue.starts()) {
            assert_eq!(agent.location(), Some(start));
            assert_eq!(agent.base_velocity, 5);
        }
    }

    #[test]
    fn explicit_starts_are_resolved() {
        let config = RescueConfig::new(2, 5).with_start_labels(["H_M", "E_B"]);
        let err = RescueBuilder::new(config, office()).build().err().unwrap();
        assert!(matches!(err, SimError::UnknownStart(ref l) if l == "E_B"));

        let config = RescueConfig::new(2, 5).with_start_labels(["R", "E_B"]);
        let rescue = RescueBuilder::new(config, twin_exits()).build().unwrap();
        assert_eq!(rescue.agents[0].location(), rescue.world.resolve("R"));
    }

    #[test]
    fn misconfiguration_is_rejected() {
        let err = RescueBuilder::new(RescueConfig::new(0, 5), office()).build().err().unwrap();
        assert!(matches!(err, SimError::NoAgents));

        let config = RescueConfig::new(2, 5).with_start_labels(["EXIT_L"]);
        let err = RescueBuilder::new(config, office()).build().err().unwrap();
        assert!(matches!(err, SimError::AgentCountMismatch { expected: 2, got: 1, .. }));

        let err = RescueBuilder::new(RescueConfig::new(1, 0), office()).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn no_exits_needs_explicit_starts() {
        let mut g = BuildingGraph::new();
        g.add_location(Location::hallway("H"));
        let err = RescueBuilder::new(RescueConfig::new(1, 5), World::new(g.clone()))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::NoExits));

        let config = RescueConfig::new(1, 5).with_start_labels(["H"]);
        assert!(RescueBuilder::new(config, World::new(g)).build().is_ok());
    }
}

// ── Single-agent sweep ────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::helpers::{corridor, labels_for, office, with_sealed_room};
    use crate::{Action, EventLog, RescueBuilder, Strategy};
    use rescue_building::RoomState;
    use rescue_core::{RescueConfig, Tick};

    #[test]
    fn corridor_totals() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(1, 5), corridor()).build().unwrap();
        let mut log = EventLog::default();
        let summary = rescue.sweep(&mut log);

        // explore: 5 distance at velocity 5 + 4 search; rescue: 5 at velocity 1
        assert_eq!(summary.strategy, Strategy::Sweep);
        assert_eq!(summary.total, Tick(10));
        assert_eq!(summary.visited, 3);
        assert!(summary.is_complete());

        let actions: Vec<_> = log.events.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            [Action::Visit, Action::Visit, Action::Explore, Action::Rescue, Action::Unload]
        );
        assert_eq!(log.events[2].ticks, 5);
        assert_eq!(log.events[3].at, Tick(5));
        assert_eq!(log.events[3].path, ["R", "H", "EXIT"]);
        assert_eq!(log.events[4].location, "EXIT");

        let agent = &summary.agents[0];
        assert_eq!((agent.explored, agent.rescued, agent.delivered), (1, 1, 1));
        assert_eq!(agent.finish, Tick(10));
    }

    #[test]
    fn office_is_fully_cleared() {
        let config = RescueConfig::new(1, 5).with_start_labels(["EXIT_R"]);
        let mut rescue = RescueBuilder::new(config, office()).build().unwrap();
        let mut log = EventLog::default();
        let summary = rescue.sweep(&mut log);

        assert!(summary.is_complete());
        assert!(rescue.world.graph.all_rooms_settled());
        assert_eq!(summary.visited, rescue.world.graph.len());
        assert_eq!(summary.total.0, log.total_ticks());
        assert_eq!(summary.agents[0].delivered, 4);

        // discovery strictly precedes rescue
        let first_rescue = log.events.iter().position(|e| e.action == Action::Rescue).unwrap();
        assert!(log.events[first_rescue..].iter().all(|e| e.action != Action::Explore));

        // empty rooms go straight to safe and generate no rescue work
        let rescued = labels_for(&log, Action::Rescue);
        assert_eq!(rescued.len(), 3);
        for empty in ["TL", "TR", "BL"] {
            assert!(!rescued.contains(&empty));
            let id = rescue.world.resolve(empty).unwrap();
            assert_eq!(rescue.world.location(id).unwrap().state(), RoomState::Safe);
        }
        assert_eq!(labels_for(&log, Action::Explore).len(), 6);
    }

    #[test]
    fn discovery_is_breadth_first() {
        let config = RescueConfig::new(1, 5).with_start_labels(["EXIT_R"]);
        let mut rescue = RescueBuilder::new(config, office()).build().unwrap();
        let mut log = EventLog::default();
        rescue.sweep(&mut log);

        let order: Vec<&str> = log
            .events
            .iter()
            .filter(|e| matches!(e.action, Action::Visit | Action::Explore))
            .map(|e| e.location.as_str())
            .collect();
        assert_eq!(&order[..2], ["EXIT_R", "H_R"]);
        assert_eq!(order.len(), 11);
        let pos = |l: &str| order.iter().position(|&o| o == l).unwrap();
        assert!(pos("TR") < pos("TM"));
        assert!(pos("H_M") < pos("TL"));
    }

    #[test]
    fn paired_observers_see_the_same_stream() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(1, 5), corridor()).build().unwrap();
        let mut pair = (EventLog::default(), EventLog::default());
        rescue.sweep(&mut pair);
        assert_eq!(pair.0.events.len(), 5);
        assert_eq!(pair.0.events, pair.1.events);
    }

    #[test]
    fn unreachable_room_is_reported() {
        let world = with_sealed_room(corridor());
        let mut rescue = RescueBuilder::new(RescueConfig::new(1, 5), world).build().unwrap();
        let summary = rescue.sweep(&mut crate::NoopObserver);
        assert_eq!(summary.visited, 3);
        assert_eq!(summary.unresolved, ["SEALED"]);
        assert!(!summary.is_complete());
    }
}

// ── Multi-agent dispatch ──────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use rustc_hash::FxHashSet;

    use super::helpers::{labels_for, office, twin_exits, with_sealed_room};
    use crate::{Action, EventLog, RescueBuilder, Strategy};
    use rescue_core::{AgentId, RescueConfig, Tick};

    #[test]
    fn lower_id_wins_ties_and_claims_stick() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(2, 5), twin_exits()).build().unwrap();
        let mut log = EventLog::default();
        let summary = rescue.dispatch(&mut log);

        // agent 0 is ready at T0 twice before agent 1 ever gets a turn
        assert_eq!(summary.strategy, Strategy::Dispatch);
        assert_eq!(summary.total, Tick(3));
        assert_eq!(log.events.len(), 2);
        assert!(log.events.iter().all(|e| e.agent == AgentId(0)));
        assert_eq!(labels_for(&log, Action::Explore), ["R"]);
        assert_eq!(summary.agents[1].finish, Tick::ZERO);
        assert_eq!(summary.agents[0].finish, Tick(3));
    }

    #[test]
    fn office_with_two_agents() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(2, 5), office()).build().unwrap();
        let mut log = EventLog::default();
        let summary = rescue.dispatch(&mut log);

        assert!(summary.is_complete());
        assert!(rescue.world.graph.all_rooms_settled());
        let delivered: usize = summary.agents.iter().map(|a| a.delivered).sum();
        assert_eq!(delivered, 4);

        let makespan = summary.agents.iter().map(|a| a.finish).max().unwrap();
        assert_eq!(summary.total, makespan);
        // both agents did some work
        assert!(summary.agents.iter().all(|a| a.explored > 0));
    }

    #[test]
    fn no_location_is_claimed_twice() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(3, 4), office()).build().unwrap();
        let mut log = EventLog::default();
        let summary = rescue.dispatch(&mut log);

        let claims: Vec<&str> = log
            .events
            .iter()
            .filter(|e| matches!(e.action, Action::Visit | Action::Explore))
            .map(|e| e.location.as_str())
            .collect();
        let unique: FxHashSet<&str> = claims.iter().copied().collect();
        assert_eq!(unique.len(), claims.len());
        assert_eq!(claims.len(), summary.visited);

        let rescued = labels_for(&log, Action::Rescue);
        let unique: FxHashSet<&str> = rescued.iter().copied().collect();
        assert_eq!(unique.len(), rescued.len());
    }

    #[test]
    fn each_agent_timeline_is_monotonic() {
        let mut rescue = RescueBuilder::new(RescueConfig::new(2, 5), office()).build().unwrap();
        let mut log = EventLog::default();
        rescue.dispatch(&mut log);

        for id in [AgentId(0), AgentId(1)] {
            let mut last = Tick::ZERO;
            for e in log.events.iter().filter(|e| e.agent == id) {
                assert!(e.at >= last, "{id} went back in time at {}", e.location);
                last = e.end();
            }
        }
    }

    #[test]
    fn stealing_claims_every_location_when_a_room_is_sealed() {
        let world = with_sealed_room(office());
        let len = world.graph.len();
        let mut rescue = RescueBuilder::new(RescueConfig::new(2, 5), world).build().unwrap();
        let summary = rescue.dispatch(&mut crate::NoopObserver);

        assert_eq!(summary.visited, len);
        assert_eq!(summary.unresolved, ["SEALED"]);
    }
}
