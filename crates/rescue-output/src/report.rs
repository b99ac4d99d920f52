//! Plain-text renderings of a building and its distance matrix.
//!
//! Both are [`Display`](fmt::Display) adapters so callers can `print!` them,
//! write them into logs, or collect them with `to_string()`.

use std::fmt;

use rescue_building::BuildingGraph;
use rescue_core::LocationId;
use rescue_routing::PathOracle;

// ── GraphSummary ──────────────────────────────────────────────────────────────

/// Node and edge counts, per-location attributes with occupants, and the
/// adjacency list.
///
/// ```text
/// Graph summary:
/// Number of nodes: 3  Number of edges: 2
/// Node information:
/// [0] label=EXIT | is_exit=true | is_hallway=false | person=0 | slowest_velocity=-
/// [2] label=R | is_exit=false | is_hallway=false | size=3 | explore_time=4 | state=unknown | person=1 | slowest_velocity=1
///     Person 1: velocity=1
///
/// Adjacency list:
/// [0] -> [(1, 2)]
/// ```
pub struct GraphSummary<'a>(pub &'a BuildingGraph);

impl fmt::Display for GraphSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.0;
        writeln!(f, "Graph summary:")?;
        writeln!(f, "Number of nodes: {}  Number of edges: {}", g.len(), g.edge_count())?;
        writeln!(f, "Node information:")?;

        for (id, loc) in g.iter() {
            write!(
                f,
                "[{}] label={} | is_exit={} | is_hallway={}",
                id.index(),
                loc.label,
                loc.is_exit,
                loc.is_hallway
            )?;
            if let Some(attrs) = loc.room_attrs() {
                write!(
                    f,
                    " | size={} | explore_time={} | state={}",
                    attrs.size,
                    attrs.explore_time,
                    loc.state()
                )?;
            }
            write!(f, " | person={} | slowest_velocity=", loc.occupants.len())?;
            match loc.slowest_velocity() {
                Some(v) => writeln!(f, "{v}")?,
                None => writeln!(f, "-")?,
            }
            for occupant in loc.occupants.values() {
                writeln!(f, "    Person {}: velocity={}", occupant.id.0, occupant.velocity)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Adjacency list:")?;
        for v in g.vertices() {
            let nbrs: Vec<String> = g
                .neighbors(v)
                .into_iter()
                .flatten()
                .map(|n| format!("({}, {})", n.index(), g.weight(v, n).unwrap_or_default()))
                .collect();
            writeln!(f, "[{}] -> [{}]", v.index(), nbrs.join(", "))?;
        }
        Ok(())
    }
}

// ── DistanceMatrix ────────────────────────────────────────────────────────────

/// All-pairs shortest distances as an aligned table; `INF` marks
/// unreachable pairs.
///
/// ```text
///         A    B EXIT
///    A    0    1    3
///    B    1    0    2
/// EXIT    3    2    0
/// ```
pub struct DistanceMatrix<'a>(pub &'a PathOracle);

impl fmt::Display for DistanceMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let oracle = self.0;
        let n = oracle.len();
        let ids = || (0..n as u32).map(LocationId);
        let cell = |i: LocationId, j: LocationId| match oracle.distance(i, j) {
            Some(d) => d.to_string(),
            None => "INF".to_owned(),
        };

        let mut width = 3;
        for label in oracle.labels() {
            width = width.max(label.len());
        }
        for i in ids() {
            for j in ids() {
                width = width.max(cell(i, j).len());
            }
        }

        write!(f, "{:>width$}", "")?;
        for label in oracle.labels() {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (i, label) in ids().zip(oracle.labels()) {
            write!(f, "{label:>width$}")?;
            for j in ids() {
                write!(f, " {:>width$}", cell(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
