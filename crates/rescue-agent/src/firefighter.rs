//! The firefighter state machine.
//!
//! A firefighter is bound to one location at a time (after
//! [`place`](Firefighter::place)) and carries zero or more occupants.  The
//! slowest person carried caps the travel speed:
//!
//! ```text
//! effective_velocity = min(base_velocity, min(v for carried occupants))
//! ticks(distance)    = ceil(distance / effective_velocity)
//! ```
//!
//! Every operation borrows the [`World`] for its duration and returns an
//! [`Outcome`]; see the crate docs for the fail-soft contract.

use tracing::{debug, warn};

use rescue_building::{Location, Occupants, RoomState};
use rescue_core::{AgentId, LocationId, travel_ticks};
use rescue_routing::Route;

use crate::{Outcome, World};

/// A mobile agent that explores rooms and carries occupants to safety.
#[derive(Debug, Clone)]
pub struct Firefighter {
    pub id: AgentId,
    /// Speed when carrying nobody.
    pub base_velocity: u32,
    location:  Option<LocationId>,
    carried:   Occupants,
    delivered: usize,
}

impl Firefighter {
    /// An unplaced firefighter carrying nobody.
    pub fn new(id: AgentId, base_velocity: u32) -> Self {
        Self {
            id,
            base_velocity,
            location:  None,
            carried:   Occupants::new(),
            delivered: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current location; `None` until placed.
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    /// Occupants currently being carried.
    pub fn carried(&self) -> &Occupants {
        &self.carried
    }

    /// Occupants unloaded at exits so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Speed after applying the slowest carried occupant.  Occupants with a
    /// velocity of zero do not slow the agent.
    pub fn effective_velocity(&self) -> u32 {
        self.carried
            .values()
            .map(|o| o.velocity)
            .filter(|&v| v > 0)
            .min()
            .map_or(self.base_velocity, |v| v.min(self.base_velocity))
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Teleport to `label` without routing.  Unknown labels are ignored.
    ///
    /// Returns whether the agent was placed.
    pub fn place(&mut self, world: &World, label: &str) -> bool {
        match world.resolve(label) {
            Some(id) => {
                self.location = Some(id);
                true
            }
            None => {
                warn!(agent = self.id.0, label, "place: unknown label");
                false
            }
        }
    }

    /// Walk the shortest route to `label`.
    pub fn move_to(&mut self, world: &World, label: &str) -> Outcome {
        let Some(from) = self.placed("move_to") else {
            return Outcome::stay(None);
        };
        let here = world.label(from);
        let Some(dest) = world.resolve(label) else {
            warn!(agent = self.id.0, label, "move_to: unknown label");
            return Outcome::stay(here);
        };
        if dest == from {
            return Outcome::stay(here);
        }
        self.walk(world, from, dest).unwrap_or_else(|| Outcome::stay(here))
    }

    /// Walk to an `unknown` room and search it.
    ///
    /// The room becomes `waiting` if anyone is inside, `safe` otherwise.
    /// Elapsed time is travel plus the room's `explore_time`.
    pub fn explore_room(&mut self, world: &mut World, label: &str) -> Outcome {
        let Some(from) = self.placed("explore_room") else {
            return Outcome::stay(None);
        };
        let here = world.label(from).map(str::to_owned);
        let Some(room_id) = self.room_in_state(world, label, RoomState::Unknown, "explore") else {
            return Outcome::stay(here.as_deref());
        };
        let Some(mut outcome) = self.walk(world, from, room_id) else {
            return Outcome::stay(here.as_deref());
        };

        if let Some(room) = world.location_mut(room_id) {
            match room.explore() {
                Ok(state) => {
                    outcome.ticks += room.room_attrs().map_or(0, |attrs| attrs.explore_time);
                    debug!(agent = self.id.0, room = label, %state, ticks = outcome.ticks, "explored");
                }
                Err(e) => warn!(agent = self.id.0, room = label, error = %e, "explore failed"),
            }
        }
        outcome
    }

    /// Collect everyone in a `waiting` room and carry them to `destination`.
    pub fn rescue_room_to_location(
        &mut self,
        world:       &mut World,
        room_label:  &str,
        destination: &str,
    ) -> Outcome {
        let Some(from) = self.placed("rescue_room_to_location") else {
            return Outcome::stay(None);
        };
        let here = world.label(from).map(str::to_owned);
        let Some(room_id) = self.room_in_state(world, room_label, RoomState::Waiting, "rescue") else {
            return Outcome::stay(here.as_deref());
        };
        let Some(dest_id) = world.resolve(destination) else {
            warn!(agent = self.id.0, destination, "rescue: unknown destination");
            return Outcome::stay(here.as_deref());
        };
        let Some(to_room) = self.walk(world, from, room_id) else {
            return Outcome::stay(here.as_deref());
        };
        if room_id == dest_id {
            // Nowhere to carry anyone; the room stays waiting.
            return to_room;
        }

        match world.oracle.get_path(room_label, destination) {
            Ok(leg) => self.carry_out(world, room_id, dest_id, leg, to_room),
            Err(e) => {
                warn!(agent = self.id.0, room = room_label, error = %e, "rescue: destination unreachable");
                to_room
            }
        }
    }

    /// Collect everyone in a `waiting` room and carry them to the closest
    /// exit reachable from that room.
    pub fn rescue_room_to_nearest_exit(&mut self, world: &mut World, room_label: &str) -> Outcome {
        let Some(from) = self.placed("rescue_room_to_nearest_exit") else {
            return Outcome::stay(None);
        };
        let here = world.label(from).map(str::to_owned);
        let Some(room_id) = self.room_in_state(world, room_label, RoomState::Waiting, "rescue") else {
            return Outcome::stay(here.as_deref());
        };
        let Some(to_room) = self.walk(world, from, room_id) else {
            return Outcome::stay(here.as_deref());
        };

        let exit = world
            .oracle
            .find_nearest_exit(room_label)
            .ok()
            .and_then(|hit| Some((world.resolve(&hit.exit)?, hit.route)));
        match exit {
            Some((exit_id, leg)) => self.carry_out(world, room_id, exit_id, leg, to_room),
            None => {
                warn!(agent = self.id.0, room = room_label, "rescue: no exit reachable");
                to_room
            }
        }
    }

    /// Hand over every carried occupant if standing on an exit.
    ///
    /// Always takes zero ticks.
    pub fn unload(&mut self, world: &World) -> Outcome {
        let here = self.location.and_then(|id| world.location(id));
        if here.is_some_and(|l| l.is_exit) && !self.carried.is_empty() {
            debug!(agent = self.id.0, delivered = self.carried.len(), "unloaded at exit");
            self.delivered += self.carried.len();
            self.carried.clear();
        }
        Outcome::stay(self.location.and_then(|id| world.label(id)))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn placed(&self, op: &'static str) -> Option<LocationId> {
        if self.location.is_none() {
            warn!(agent = self.id.0, op, "firefighter used before placement");
        }
        self.location
    }

    /// Resolve `label` to a genuine room currently in `wanted` state.
    fn room_in_state(
        &self,
        world:  &World,
        label:  &str,
        wanted: RoomState,
        op:     &'static str,
    ) -> Option<LocationId> {
        let id = world.resolve(label);
        let state = id.and_then(|id| world.location(id)).map(Location::state);
        if state == Some(wanted) {
            return id;
        }
        match state {
            None => warn!(agent = self.id.0, room = label, op, "unknown room"),
            Some(state) => warn!(agent = self.id.0, room = label, op, %state, "room is not {wanted}"),
        }
        None
    }

    /// Travel from `from` to `to` along the shortest route at the current
    /// effective velocity.  `None` (and no movement) if unreachable.
    fn walk(&mut self, world: &World, from: LocationId, to: LocationId) -> Option<Outcome> {
        let (a, b) = (world.label(from)?, world.label(to)?);
        match world.oracle.get_path(a, b) {
            Ok(route) => {
                self.location = Some(to);
                Some(self.timed(route))
            }
            Err(e) => {
                warn!(agent = self.id.0, error = %e, "unreachable");
                None
            }
        }
    }

    /// Pick up the room's occupants, then walk `leg` at the loaded speed.
    fn carry_out(
        &mut self,
        world:   &mut World,
        room_id: LocationId,
        dest_id: LocationId,
        leg:     Route,
        so_far:  Outcome,
    ) -> Outcome {
        let Some(room) = world.location_mut(room_id) else {
            return so_far;
        };
        match room.evacuate() {
            Ok(people) => self.carried.extend(people),
            Err(e) => {
                warn!(agent = self.id.0, error = %e, "rescue: evacuation refused");
                return so_far;
            }
        }
        self.location = Some(dest_id);
        let leg = self.timed(leg);
        debug!(
            agent = self.id.0,
            carrying = self.carried.len(),
            velocity = self.effective_velocity(),
            ticks = leg.ticks,
            "carried occupants"
        );
        so_far.chain(leg)
    }

    fn timed(&self, route: Route) -> Outcome {
        Outcome {
            ticks: travel_ticks(route.distance, self.effective_velocity()),
            path:  route.labels,
        }
    }
}
