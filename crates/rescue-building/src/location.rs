//! Locations, rooms, occupants, and the room state machine.
//!
//! A [`Location`] is any node of the building graph.  What distinguishes a
//! room from a hallway or an exit is its [`LocationKind`]: only
//! `LocationKind::Room` carries a size, an exploration cost, and a
//! [`RoomState`].  Behaviour that differs between the two is written as an
//! exhaustive `match` on the kind, never by probing for fields.

use std::collections::BTreeMap;
use std::fmt;

use rescue_core::OccupantId;

use crate::{BuildingError, BuildingResult};

// ── Occupant ──────────────────────────────────────────────────────────────────

/// A person inside the building.
///
/// `velocity` caps how fast anyone carrying this person can travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id:       OccupantId,
    pub velocity: u32,
}

impl Occupant {
    pub fn new(id: u32, velocity: u32) -> Self {
        Self { id: OccupantId(id), velocity }
    }
}

/// Occupant mapping keyed by id.  Ordered so reports and merges are
/// deterministic.
pub type Occupants = BTreeMap<OccupantId, Occupant>;

// ── RoomState ─────────────────────────────────────────────────────────────────

/// Discovery/rescue state of a location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomState {
    /// Not explored yet.
    Unknown,
    /// Explored; occupants are still inside.
    Waiting,
    /// Explored and empty.  Terminal.
    Safe,
    /// Exits, hallways, and placeholder nodes.  Terminal.
    NotApplicable,
}

impl RoomState {
    /// `true` for the two terminal states.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, RoomState::Safe | RoomState::NotApplicable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomState::Unknown       => "unknown",
            RoomState::Waiting       => "waiting",
            RoomState::Safe          => "safe",
            RoomState::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Room attributes ───────────────────────────────────────────────────────────

/// Room-only attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomAttrs {
    /// Door-to-hallway edge weight used by the quadrant door rule.
    pub size: u32,
    /// Ticks needed to search the room once the agent is inside.
    pub explore_time: u64,
    state: RoomState,
}

impl RoomAttrs {
    pub fn new(size: u32, explore_time: u64) -> Self {
        Self { size, explore_time, state: RoomState::Unknown }
    }
}

/// Tagged variant for location behaviour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    /// Exit, hallway segment, or auto-created placeholder.
    #[default]
    Plain,
    Room(RoomAttrs),
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A node of the building graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique, stable identifier used by every label-based query.
    pub label:      String,
    pub is_exit:    bool,
    pub is_hallway: bool,
    /// People currently at this location.
    pub occupants:  Occupants,
    pub kind:       LocationKind,
}

impl Location {
    /// A plain location with no exit/hallway flag.
    pub fn plain(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn exit(label: impl Into<String>) -> Self {
        Self { is_exit: true, ..Self::plain(label) }
    }

    pub fn hallway(label: impl Into<String>) -> Self {
        Self { is_hallway: true, ..Self::plain(label) }
    }

    /// A room in state `unknown` with no occupants.
    pub fn room(label: impl Into<String>, size: u32, explore_time: u64) -> Self {
        Self {
            kind: LocationKind::Room(RoomAttrs::new(size, explore_time)),
            ..Self::plain(label)
        }
    }

    /// Builder-style occupant insertion (later ids overwrite earlier ones).
    pub fn with_occupants(mut self, occupants: impl IntoIterator<Item = Occupant>) -> Self {
        self.occupants.extend(occupants.into_iter().map(|o| (o.id, o)));
        self
    }

    /// `Some` for genuine rooms: room attributes on a location that is
    /// neither an exit nor a hallway.
    pub fn room_attrs(&self) -> Option<&RoomAttrs> {
        match &self.kind {
            LocationKind::Room(attrs) if !self.is_exit && !self.is_hallway => Some(attrs),
            _ => None,
        }
    }

    #[inline]
    pub fn is_room(&self) -> bool {
        self.room_attrs().is_some()
    }

    /// Current state; always `NotApplicable` for anything but a genuine room.
    pub fn state(&self) -> RoomState {
        self.room_attrs().map_or(RoomState::NotApplicable, |attrs| attrs.state)
    }

    /// Slowest occupant velocity, or `None` when nobody is here.
    pub fn slowest_velocity(&self) -> Option<u32> {
        self.occupants.values().map(|o| o.velocity).min()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// `unknown → safe` when empty, `unknown → waiting` otherwise.
    ///
    /// Returns the new state.
    pub fn explore(&mut self) -> BuildingResult<RoomState> {
        let has_occupants = !self.occupants.is_empty();
        let attrs = self.room_attrs_mut()?;
        if attrs.state != RoomState::Unknown {
            let from = attrs.state;
            return Err(self.invalid(from, "be explored"));
        }
        attrs.state = if has_occupants { RoomState::Waiting } else { RoomState::Safe };
        Ok(attrs.state)
    }

    /// `waiting → safe`, handing every occupant over to the caller.
    pub fn evacuate(&mut self) -> BuildingResult<Occupants> {
        let attrs = self.room_attrs_mut()?;
        if attrs.state != RoomState::Waiting {
            let from = attrs.state;
            return Err(self.invalid(from, "be evacuated"));
        }
        attrs.state = RoomState::Safe;
        Ok(std::mem::take(&mut self.occupants))
    }

    fn room_attrs_mut(&mut self) -> BuildingResult<&mut RoomAttrs> {
        match &mut self.kind {
            LocationKind::Room(attrs) if !self.is_exit && !self.is_hallway => Ok(attrs),
            _ => Err(BuildingError::NotARoom(self.label.clone())),
        }
    }

    fn invalid(&self, from: RoomState, action: &'static str) -> BuildingError {
        BuildingError::InvalidTransition { label: self.label.clone(), from, action }
    }
}
