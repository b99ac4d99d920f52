//! Unit tests for rescue-agent.

#[cfg(test)]
mod helpers {
    use rescue_building::{BuildingGraph, Location, Occupant};

    use crate::World;

    /// Floor with two exits, one occupied room, one empty room and an
    /// unreachable exit.
    ///
    /// ```text
    ///   EXIT_A(0) --4-- H(1) --6-- R(2) --12-- EXIT_B(4)
    ///                    \
    ///                     1-- S(3)            ISO(5)
    /// ```
    ///
    /// R holds two occupants with velocities 2 and 4; explore time 3.
    pub fn world() -> World {
        let mut g = BuildingGraph::new();
        let exit_a = g.add_location(Location::exit("EXIT_A"));
        let hall = g.add_location(Location::hallway("H"));
        let r = g.add_location(
            Location::room("R", 6, 3).with_occupants([Occupant::new(1, 2), Occupant::new(2, 4)]),
        );
        let s = g.add_location(Location::room("S", 1, 2));
        let exit_b = g.add_location(Location::exit("EXIT_B"));
        g.add_location(Location::exit("ISO"));
        g.add_edge(exit_a, hall, 4);
        g.add_edge(hall, r, 6);
        g.add_edge(hall, s, 1);
        g.add_edge(r, exit_b, 12);
        World::new(g)
    }

    pub fn path(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod outcome {
    use super::helpers::path;
    use crate::Outcome;

    #[test]
    fn stay_has_no_progress() {
        let o = Outcome::stay(Some("H"));
        assert_eq!(o.ticks, 0);
        assert_eq!(o.path, path(&["H"]));
        assert!(!o.made_progress());
        assert!(Outcome::stay(None).path.is_empty());
    }

    #[test]
    fn chain_merges_junction_label() {
        let a = Outcome { ticks: 2, path: path(&["A", "B"]) };
        let b = Outcome { ticks: 3, path: path(&["B", "C"]) };
        let joined = a.chain(b);
        assert_eq!(joined.ticks, 5);
        assert_eq!(joined.path, path(&["A", "B", "C"]));
    }

    #[test]
    fn chain_onto_empty_keeps_everything() {
        let b = Outcome { ticks: 1, path: path(&["X", "Y"]) };
        assert_eq!(Outcome::default().chain(b.clone()), b);
    }
}

// ── Placement and movement ────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::helpers::{path, world};
    use crate::{Firefighter, Outcome};
    use rescue_core::AgentId;

    #[test]
    fn place_known_and_unknown() {
        let w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        assert!(!ff.place(&w, "NOWHERE"));
        assert_eq!(ff.location(), None);
        assert!(ff.place(&w, "H"));
        assert_eq!(ff.location(), w.resolve("H"));
    }

    #[test]
    fn unplaced_agent_does_nothing() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        assert_eq!(ff.move_to(&w, "H"), Outcome::stay(None));
        assert_eq!(ff.explore_room(&mut w, "R"), Outcome::stay(None));
        assert_eq!(ff.rescue_room_to_nearest_exit(&mut w, "R"), Outcome::stay(None));
        assert_eq!(ff.location(), None);
    }

    #[test]
    fn move_rounds_travel_time_up() {
        let w = world();
        let mut ff = Firefighter::new(AgentId(0), 3);
        ff.place(&w, "EXIT_A");
        // distance 10 at velocity 3
        let o = ff.move_to(&w, "R");
        assert_eq!(o.ticks, 4);
        assert_eq!(o.path, path(&["EXIT_A", "H", "R"]));
        assert_eq!(ff.location(), w.resolve("R"));
    }

    #[test]
    fn move_to_self_is_free() {
        let w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "H");
        assert_eq!(ff.move_to(&w, "H"), Outcome::stay(Some("H")));
    }

    #[test]
    fn unreachable_or_unknown_target_leaves_agent_in_place() {
        let w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "H");
        assert_eq!(ff.move_to(&w, "ISO"), Outcome::stay(Some("H")));
        assert_eq!(ff.move_to(&w, "NOWHERE"), Outcome::stay(Some("H")));
        assert_eq!(ff.location(), w.resolve("H"));
    }
}

// ── Explore ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod explore {
    use super::helpers::{path, world};
    use crate::{Firefighter, Outcome};
    use rescue_building::RoomState;
    use rescue_core::AgentId;

    fn state(w: &crate::World, label: &str) -> RoomState {
        w.location(w.resolve(label).unwrap()).unwrap().state()
    }

    #[test]
    fn occupied_room_becomes_waiting() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "EXIT_A");
        let o = ff.explore_room(&mut w, "R");
        // 2 ticks of travel + 3 to search
        assert_eq!(o.ticks, 5);
        assert_eq!(o.path, path(&["EXIT_A", "H", "R"]));
        assert_eq!(state(&w, "R"), RoomState::Waiting);
        assert!(ff.carried().is_empty());
    }

    #[test]
    fn empty_room_becomes_safe() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "EXIT_A");
        let o = ff.explore_room(&mut w, "S");
        assert_eq!(o.ticks, 1 + 2);
        assert_eq!(state(&w, "S"), RoomState::Safe);
    }

    #[test]
    fn exploring_from_inside_costs_only_search_time() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "R");
        let o = ff.explore_room(&mut w, "R");
        assert_eq!(o.ticks, 3);
        assert_eq!(o.path, path(&["R"]));
    }

    #[test]
    fn second_explore_is_rejected() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "EXIT_A");
        ff.explore_room(&mut w, "R");
        assert_eq!(ff.explore_room(&mut w, "R"), Outcome::stay(Some("R")));
        assert_eq!(state(&w, "R"), RoomState::Waiting);
    }

    #[test]
    fn non_rooms_cannot_be_explored() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "EXIT_A");
        assert_eq!(ff.explore_room(&mut w, "H"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.explore_room(&mut w, "EXIT_B"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.explore_room(&mut w, "NOWHERE"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.location(), w.resolve("EXIT_A"));
    }
}

// ── Rescue and unload ─────────────────────────────────────────────────────────

#[cfg(test)]
mod rescue {
    use super::helpers::{path, world};
    use crate::{Firefighter, Outcome, World};
    use rescue_building::{BuildingGraph, Location, Occupant, RoomState};
    use rescue_core::AgentId;

    fn explored(w: &mut World) -> Firefighter {
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(w, "EXIT_A");
        ff.explore_room(w, "R");
        ff
    }

    #[test]
    fn slowest_occupant_sets_the_pace() {
        let mut w = world();
        let mut ff = explored(&mut w);
        assert_eq!(ff.effective_velocity(), 5);

        // R -> H -> EXIT_A is distance 10, carried at velocity 2
        let o = ff.rescue_room_to_nearest_exit(&mut w, "R");
        assert_eq!(o.ticks, 5);
        assert_eq!(o.path, path(&["R", "H", "EXIT_A"]));
        assert_eq!(ff.effective_velocity(), 2);
        assert_eq!(ff.carried().len(), 2);
        assert_eq!(ff.location(), w.resolve("EXIT_A"));

        let room = w.location(w.resolve("R").unwrap()).unwrap();
        assert_eq!(room.state(), RoomState::Safe);
        assert!(room.occupants.is_empty());
    }

    #[test]
    fn walk_to_room_is_at_full_speed() {
        let mut w = world();
        let mut ff = explored(&mut w);
        ff.move_to(&w, "S");
        // S -> R is 7 at velocity 5, then R -> EXIT_A 10 at velocity 2
        let o = ff.rescue_room_to_nearest_exit(&mut w, "R");
        assert_eq!(o.ticks, 2 + 5);
        assert_eq!(o.path, path(&["S", "H", "R", "H", "EXIT_A"]));
    }

    #[test]
    fn rescue_to_named_location() {
        let mut w = world();
        let mut ff = explored(&mut w);
        let o = ff.rescue_room_to_location(&mut w, "R", "EXIT_B");
        assert_eq!(o.ticks, 6);
        assert_eq!(o.path, path(&["R", "EXIT_B"]));
        assert_eq!(ff.location(), w.resolve("EXIT_B"));
    }

    #[test]
    fn rescue_into_the_room_itself_moves_nobody() {
        let mut w = world();
        let mut ff = explored(&mut w);
        ff.move_to(&w, "H");
        let o = ff.rescue_room_to_location(&mut w, "R", "R");
        assert_eq!(o.ticks, 2);
        assert!(ff.carried().is_empty());
        assert_eq!(w.location(w.resolve("R").unwrap()).unwrap().state(), RoomState::Waiting);
    }

    #[test]
    fn rescue_requires_waiting_room() {
        let mut w = world();
        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "EXIT_A");
        assert_eq!(ff.rescue_room_to_nearest_exit(&mut w, "R"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.rescue_room_to_location(&mut w, "H", "EXIT_A"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.rescue_room_to_location(&mut w, "R", "NOWHERE"), Outcome::stay(Some("EXIT_A")));
        assert_eq!(w.location(w.resolve("R").unwrap()).unwrap().state(), RoomState::Unknown);
    }

    #[test]
    fn unload_only_at_exits() {
        let mut w = world();
        let mut ff = explored(&mut w);
        // R -> H is 6 at velocity 2
        let o = ff.rescue_room_to_location(&mut w, "R", "H");
        assert_eq!(o.ticks, 3);

        assert_eq!(ff.unload(&w), Outcome::stay(Some("H")));
        assert_eq!(ff.carried().len(), 2);

        ff.move_to(&w, "EXIT_A");
        ff.unload(&w);
        assert!(ff.carried().is_empty());
        assert_eq!(ff.delivered(), 2);
        assert_eq!(ff.effective_velocity(), 5);

        // idempotent
        assert_eq!(ff.unload(&w), Outcome::stay(Some("EXIT_A")));
        assert_eq!(ff.delivered(), 2);
    }

    #[test]
    fn zero_velocity_occupant_does_not_stall() {
        let mut g = BuildingGraph::new();
        let e = g.add_location(Location::exit("E"));
        let r = g.add_location(Location::room("R", 1, 0).with_occupants([Occupant::new(1, 0)]));
        g.add_edge(e, r, 10);
        let mut w = World::new(g);

        let mut ff = Firefighter::new(AgentId(0), 5);
        ff.place(&w, "R");
        ff.explore_room(&mut w, "R");
        let o = ff.rescue_room_to_nearest_exit(&mut w, "R");
        assert_eq!(ff.effective_velocity(), 5);
        assert_eq!(o.ticks, 2);
    }

    #[test]
    fn no_reachable_exit_keeps_room_waiting() {
        let mut g = BuildingGraph::new();
        g.add_location(Location::exit("E"));
        let h = g.add_location(Location::hallway("H"));
        let r = g.add_location(Location::room("R", 1, 0).with_occupants([Occupant::new(1, 3)]));
        g.add_edge(h, r, 4);
        let mut w = World::new(g);

        let mut ff = Firefighter::new(AgentId(0), 2);
        ff.place(&w, "H");
        ff.explore_room(&mut w, "R");
        ff.move_to(&w, "H");
        let o = ff.rescue_room_to_nearest_exit(&mut w, "R");
        assert_eq!(o.ticks, 2);
        assert_eq!(o.path, path(&["H", "R"]));
        assert!(ff.carried().is_empty());
        assert_eq!(w.location(r).unwrap().state(), RoomState::Waiting);
    }
}
