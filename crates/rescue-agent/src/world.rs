//! The shared world of one rescue session.

use rescue_building::{BuildingGraph, Location};
use rescue_core::LocationId;
use rescue_routing::PathOracle;

/// Building graph plus the path oracle built from it.
///
/// Owned by the session and lent to every firefighter operation.  Routing
/// data is read-only; locations are mutated through
/// [`location_mut`](Self::location_mut) when rooms are explored or emptied.
pub struct World {
    pub graph:  BuildingGraph,
    pub oracle: PathOracle,
}

impl World {
    /// Freeze `graph`'s topology and precompute all shortest paths.
    pub fn new(graph: BuildingGraph) -> Self {
        let oracle = PathOracle::build(&graph);
        Self { graph, oracle }
    }

    pub fn resolve(&self, label: &str) -> Option<LocationId> {
        self.oracle.resolve(label)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.graph.location(id)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.graph.location_mut(id)
    }

    pub fn label(&self, id: LocationId) -> Option<&str> {
        self.oracle.label(id)
    }
}
