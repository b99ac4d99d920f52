//! JSON floor loader.
//!
//! # Format
//!
//! A single JSON array.  Every element has a `type`:
//!
//! | `type`      | Creates                     | Other fields                              |
//! |-------------|-----------------------------|-------------------------------------------|
//! | `"EDGE"`    | an undirected edge          | `u`, `v` (labels), `weight`               |
//! | `"EXIT"`    | an exit                     | `label`                                   |
//! | `"Hallway"` | a hallway segment           | `label`                                   |
//! | *other*     | a room in state `unknown`   | `label`, `size`, `explore_time`, `person_list` |
//!
//! ```json
//! [
//!   {"type": "EXIT", "label": "EXIT_L"},
//!   {"type": "Hallway", "label": "H_L"},
//!   {"type": "Office", "label": "TL", "size": 2, "explore_time": 3,
//!    "person_list": [{"id": 1, "velocity": 2}]},
//!   {"type": "EDGE", "u": "EXIT_L", "v": "H_L", "weight": 2}
//! ]
//! ```
//!
//! Locations are inserted in file order.  Edges are applied after all
//! locations; an edge naming an unknown label is skipped.  Finally the
//! quadrant door rule wires offices to their hallway segments.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use rescue_core::LocationId;

use crate::{BuildingError, BuildingGraph, BuildingResult, Location, Occupant, link_quadrant_doors};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FloorRecord {
    #[serde(rename = "type")]
    kind:         String,
    label:        Option<String>,
    u:            Option<String>,
    v:            Option<String>,
    weight:       Option<u32>,
    size:         Option<u32>,
    explore_time: Option<u64>,
    #[serde(default)]
    person_list:  Vec<PersonRecord>,
}

#[derive(Deserialize)]
struct PersonRecord {
    id:       u32,
    velocity: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a floor from a JSON file and apply the door rule.
pub fn load_building_json(path: impl AsRef<Path>) -> BuildingResult<BuildingGraph> {
    let file = std::fs::File::open(path)?;
    load_building_reader(std::io::BufReader::new(file))
}

/// Like [`load_building_json`] but accepts any `Read` source.
pub fn load_building_reader<R: Read>(reader: R) -> BuildingResult<BuildingGraph> {
    let records: Vec<FloorRecord> = serde_json::from_reader(reader)?;

    let mut graph = BuildingGraph::with_capacity(records.len());
    // Duplicate labels: the last definition wins for edge lookups.
    let mut by_label: FxHashMap<String, LocationId> = FxHashMap::default();
    let mut edges = Vec::new();

    for record in records {
        if record.kind == "EDGE" {
            edges.push(record);
            continue;
        }
        let location = location_from_record(record)?;
        let label = location.label.clone();
        let id = graph.add_location(location);
        by_label.insert(label, id);
    }

    for edge in edges {
        let (Some(u), Some(v)) = (edge.u, edge.v) else {
            return Err(BuildingError::Parse("EDGE record needs `u` and `v`".into()));
        };
        let weight = edge
            .weight
            .ok_or_else(|| BuildingError::Parse(format!("EDGE {u}-{v} has no `weight`")))?;
        match (by_label.get(&u), by_label.get(&v)) {
            (Some(&a), Some(&b)) => graph.add_edge(a, b, weight),
            _ => debug!(%u, %v, "edge skipped: unknown label"),
        }
    }

    let doors = link_quadrant_doors(&mut graph);
    debug!(
        locations = graph.len(),
        edges = graph.edge_count(),
        doors,
        "floor loaded"
    );
    Ok(graph)
}

fn location_from_record(record: FloorRecord) -> BuildingResult<Location> {
    let label = record
        .label
        .ok_or_else(|| BuildingError::Parse(format!("{} record has no `label`", record.kind)))?;

    match record.kind.as_str() {
        "EXIT" => Ok(Location::exit(label)),
        "Hallway" => Ok(Location::hallway(label)),
        _ => {
            let size = record
                .size
                .ok_or_else(|| BuildingError::Parse(format!("room {label} has no `size`")))?;
            let explore_time = record
                .explore_time
                .ok_or_else(|| BuildingError::Parse(format!("room {label} has no `explore_time`")))?;
            let occupants = record
                .person_list
                .into_iter()
                .map(|p| Occupant::new(p.id, p.velocity));
            Ok(Location::room(label, size, explore_time).with_occupants(occupants))
        }
    }
}
