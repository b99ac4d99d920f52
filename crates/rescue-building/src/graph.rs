//! The building topology: an arena of locations plus undirected, weighted
//! adjacency over their indices.
//!
//! # Data layout
//!
//! Locations live in a `Vec<Location>` indexed by [`LocationId`].  Each
//! vertex keeps its neighbours as a `Vec<(LocationId, weight)>` in insertion
//! order.  Insertion order is part of the contract: breadth-first sweeps and
//! the path oracle's tie-breaking both follow it, so the same floor always
//! produces the same run.
//!
//! Edge weights are symmetric and unique per pair: adding an edge that
//! already exists overwrites the weight on both sides (last write wins).

use rescue_core::LocationId;

use crate::{BuildingError, BuildingResult, Location};

/// An undirected edge `(u, v, weight)` with `u <= v`.
pub type Edge = (LocationId, LocationId, u32);

/// Location registry plus undirected weighted adjacency.
///
/// The graph is mutated only while the floor is being assembled.  Once a
/// `PathOracle` has been built from it, only location *state* (room state,
/// occupants) is expected to change.
#[derive(Clone, Debug, Default)]
pub struct BuildingGraph {
    locations: Vec<Location>,
    adjacency: Vec<Vec<(LocationId, u32)>>,
}

impl BuildingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of locations.
    pub fn with_capacity(locations: usize) -> Self {
        Self {
            locations: Vec::with_capacity(locations),
            adjacency: Vec::with_capacity(locations),
        }
    }

    // ── Vertices ──────────────────────────────────────────────────────────

    /// Add a location and return its `LocationId` (sequential from 0).
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.index())
    }

    /// Resolve a location reference obtained from this graph back to its
    /// index.  Matching is by identity, not by value.
    pub fn position_of(&self, location: &Location) -> BuildingResult<LocationId> {
        self.locations
            .iter()
            .position(|l| std::ptr::eq(l, location))
            .map(|i| LocationId(i as u32))
            .ok_or(BuildingError::LocationNotFound)
    }

    /// First location (in index order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|l| l.label == label)
            .map(|i| LocationId(i as u32))
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = LocationId> + use<> {
        (0..self.locations.len() as u32).map(LocationId)
    }

    /// `(id, location)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i as u32), l))
    }

    /// Exit vertices in ascending id order.
    pub fn exits(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.iter().filter(|(_, l)| l.is_exit).map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    /// `true` once every location is `safe` or `not_applicable`.
    pub fn all_rooms_settled(&self) -> bool {
        self.locations.iter().all(|l| l.state().is_settled())
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Add (or overwrite) the undirected edge `u -- v`.
    ///
    /// Indices past the current end are filled with default placeholder
    /// locations so a floor can be wired before every node is described.
    pub fn add_edge(&mut self, u: LocationId, v: LocationId, weight: u32) {
        let needed = u.index().max(v.index()) + 1;
        while self.locations.len() < needed {
            self.add_location(Location::default());
        }
        set_weight(&mut self.adjacency[u.index()], v, weight);
        set_weight(&mut self.adjacency[v.index()], u, weight);
    }

    /// Remove the edge `u -- v` if present.  Returns whether it existed.
    pub fn remove_edge(&mut self, u: LocationId, v: LocationId) -> BuildingResult<bool> {
        self.check(u)?;
        self.check(v)?;
        let before = self.adjacency[u.index()].len();
        self.adjacency[u.index()].retain(|&(n, _)| n != v);
        self.adjacency[v.index()].retain(|&(n, _)| n != u);
        Ok(self.adjacency[u.index()].len() != before)
    }

    pub fn has_edge(&self, u: LocationId, v: LocationId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Neighbours of `v` in edge insertion order.
    pub fn neighbors(&self, v: LocationId) -> BuildingResult<impl Iterator<Item = LocationId> + '_> {
        self.check(v)?;
        Ok(self.adjacency[v.index()].iter().map(|&(n, _)| n))
    }

    /// Weight of `u -- v`, or `None` if there is no such edge (or either
    /// index is out of range).
    pub fn weight(&self, u: LocationId, v: LocationId) -> Option<u32> {
        self.adjacency
            .get(u.index())?
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    pub fn degree(&self, v: LocationId) -> BuildingResult<usize> {
        self.check(v)?;
        Ok(self.adjacency[v.index()].len())
    }

    /// Every undirected edge exactly once, as `(min, max, weight)`, in the
    /// order first encountered by vertex then insertion.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        for (u, nbrs) in self.adjacency.iter().enumerate() {
            let u = LocationId(u as u32);
            for &(v, w) in nbrs {
                // Each pair is stored on both sides; keep the copy seen from
                // the lower index.
                if u <= v {
                    out.push((u, v, w));
                }
            }
        }
        out
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, nbrs)| nbrs.iter().filter(|&&(v, _)| u <= v.index()).count())
            .sum()
    }

    fn check(&self, v: LocationId) -> BuildingResult<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(BuildingError::IndexOutOfBounds { index: v, len: self.locations.len() })
        }
    }
}

fn set_weight(nbrs: &mut Vec<(LocationId, u32)>, to: LocationId, weight: u32) {
    match nbrs.iter_mut().find(|(n, _)| *n == to) {
        Some(slot) => slot.1 = weight,
        None => nbrs.push((to, weight)),
    }
}
