//! The quadrant door rule.
//!
//! Floor descriptions list corridors and exits explicitly but leave the
//! office doors implicit: each of the six offices opens onto the hallway
//! segment on its side of the floor, and the door edge costs the room's
//! `size`.  The rule is applied once, after loading, and silently skips
//! pairs whose labels are missing or whose first label is not a room.

use tracing::debug;

use crate::BuildingGraph;

/// `(room, hallway segment)` pairs wired by [`link_quadrant_doors`].
pub const QUADRANT_DOORS: [(&str, &str); 6] = [
    ("TL", "H_L"),
    ("TM", "H_M"),
    ("TR", "H_R"),
    ("BL", "H_L"),
    ("BM", "H_M"),
    ("BR", "H_R"),
];

/// Connect every office present in `graph` to its hallway segment.
///
/// Returns the number of doors added.
pub fn link_quadrant_doors(graph: &mut BuildingGraph) -> usize {
    let mut linked = 0;
    for (room_label, hall_label) in QUADRANT_DOORS {
        let (Some(room), Some(hall)) = (graph.find(room_label), graph.find(hall_label)) else {
            continue;
        };
        let Some(size) = graph
            .location(room)
            .and_then(|l| l.room_attrs())
            .map(|attrs| attrs.size)
        else {
            debug!(room = room_label, "door rule skipped: not a room");
            continue;
        };
        graph.add_edge(room, hall, size);
        linked += 1;
    }
    linked
}
