//! All-pairs shortest paths with next-hop reconstruction.
//!
//! # Algorithm
//!
//! Floyd–Warshall over a dense `n × n` matrix stored row-major in a flat
//! `Vec`.  `O(n³)` time, `O(n²)` space; `n` is the number of locations on a
//! floor, so this is cheap and lets every later query run in `O(path)`.
//!
//! Relaxation is strictly monotonic (`<`, never `<=`), so ties keep the
//! first path found in edge insertion order and `k, i, j` loop order.  The
//! same graph therefore always yields the same routes.
//!
//! # Staleness
//!
//! The oracle snapshots the edge set, labels, and exit flags at build time.
//! Mutating the graph's edges afterwards is not supported; room state and
//! occupants may change freely because routing never reads them.

use rustc_hash::FxHashMap;
use tracing::debug;

use rescue_building::{BuildingGraph, Location};
use rescue_core::LocationId;

use crate::{RoutingError, RoutingResult};

const UNREACHABLE: u64 = u64::MAX;

/// Extra hops tolerated during reconstruction before the next-hop matrix is
/// declared corrupt.
const RECONSTRUCT_SLACK: usize = 5;

// ── Route types ───────────────────────────────────────────────────────────────

/// A shortest path between two labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Sum of edge weights along `labels`.
    pub distance: u64,
    /// Labels from source to destination, both included.
    pub labels: Vec<String>,
}

impl Route {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// `true` if source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.hops() == 0
    }
}

/// The nearest exit from some start location and the route to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRoute {
    pub exit:  String,
    pub route: Route,
}

// ── PathOracle ────────────────────────────────────────────────────────────────

/// Precomputed distance and next-hop matrices plus a label index.
///
/// Build once per floor with [`PathOracle::build`]; every query is read-only.
pub struct PathOracle {
    n: usize,
    /// `dist[i * n + j]`, `UNREACHABLE` when there is no path.
    dist: Vec<u64>,
    /// `next[i * n + j]`: first step from `i` towards `j`.
    next: Vec<Option<LocationId>>,
    labels: Vec<String>,
    by_label: FxHashMap<String, LocationId>,
    exits: Vec<LocationId>,
}

impl PathOracle {
    /// Run Floyd–Warshall over `graph`'s current edge set.
    pub fn build(graph: &BuildingGraph) -> Self {
        let n = graph.len();
        let mut dist = vec![UNREACHABLE; n * n];
        let mut next = vec![None; n * n];

        for i in 0..n {
            dist[i * n + i] = 0;
            next[i * n + i] = Some(LocationId(i as u32));
        }

        // Keep the lightest definition if a pair is described twice.
        for (u, v, w) in graph.edges() {
            let (ui, vi, w) = (u.index(), v.index(), u64::from(w));
            if w < dist[ui * n + vi] {
                dist[ui * n + vi] = w;
                dist[vi * n + ui] = w;
                next[ui * n + vi] = Some(v);
                next[vi * n + ui] = Some(u);
            }
        }

        relax_all(&mut dist, &mut next, n);

        // Unlabelled placeholders are addressed by their index.
        let labels: Vec<String> = graph
            .iter()
            .map(|(id, loc)| {
                if loc.label.is_empty() { id.index().to_string() } else { loc.label.clone() }
            })
            .collect();

        let mut by_label = FxHashMap::default();
        for (i, label) in labels.iter().enumerate() {
            by_label.insert(label.clone(), LocationId(i as u32));
        }

        let exits: Vec<LocationId> = graph.exits().collect();

        debug!(locations = n, exits = exits.len(), "path oracle built");

        Self { n, dist, next, labels, by_label, exits }
    }

    // ── Index-level access ────────────────────────────────────────────────

    /// Number of locations covered.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Shortest distance from `i` to `j`; `None` if unreachable or out of range.
    pub fn distance(&self, i: LocationId, j: LocationId) -> Option<u64> {
        let d = *self.dist.get(self.cell(i, j)?)?;
        (d != UNREACHABLE).then_some(d)
    }

    /// First step from `i` towards `j` (`i` itself when `i == j`).
    pub fn next_hop(&self, i: LocationId, j: LocationId) -> Option<LocationId> {
        *self.next.get(self.cell(i, j)?)?
    }

    pub fn resolve(&self, label: &str) -> Option<LocationId> {
        self.by_label.get(label).copied()
    }

    pub fn label(&self, id: LocationId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    /// Labels in index order, as used by every query result.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Exit vertices in index order.
    pub fn exits(&self) -> &[LocationId] {
        &self.exits
    }

    /// Vertex sequence from `u` to `v`, or `None` when unreachable.
    ///
    /// # Panics
    /// Panics if the walk exceeds `n + 5` vertices, which can only happen if
    /// the next-hop matrix is corrupt.
    pub fn reconstruct(&self, u: LocationId, v: LocationId) -> Option<Vec<LocationId>> {
        self.next_hop(u, v)?;
        let mut path = vec![u];
        let mut cur = u;
        while cur != v {
            cur = self.next_hop(cur, v)?;
            path.push(cur);
            assert!(
                path.len() <= self.n + RECONSTRUCT_SLACK,
                "path from {u} to {v} exceeded {} vertices: next-hop matrix is corrupt",
                self.n + RECONSTRUCT_SLACK,
            );
        }
        Some(path)
    }

    // ── Label queries ─────────────────────────────────────────────────────

    /// Shortest route between two labels.
    pub fn get_path(&self, from: &str, to: &str) -> RoutingResult<Route> {
        let u = self.lookup(from)?;
        let v = self.lookup(to)?;
        self.route_between(u, v).ok_or_else(|| RoutingError::NoPath {
            from: from.to_owned(),
            to:   to.to_owned(),
        })
    }

    /// Closest exit from `start`.  Ties go to the lowest exit index.
    pub fn find_nearest_exit(&self, start: &str) -> RoutingResult<ExitRoute> {
        let u = self.lookup(start)?;

        let mut best: Option<(u64, LocationId)> = None;
        for &exit in &self.exits {
            let Some(d) = self.distance(u, exit) else { continue };
            if best.is_none_or(|(best_d, _)| d < best_d) {
                best = Some((d, exit));
            }
        }

        let (_, exit) = best.ok_or_else(|| RoutingError::NoExitReachable(start.to_owned()))?;
        let route = self
            .route_between(u, exit)
            .ok_or_else(|| RoutingError::NoExitReachable(start.to_owned()))?;
        Ok(ExitRoute { exit: self.labels[exit.index()].clone(), route })
    }

    /// Look up the location registered under `label` in `graph`.
    pub fn location_by_label<'g>(&self, graph: &'g BuildingGraph, label: &str) -> Option<&'g Location> {
        graph.location(self.resolve(label)?)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn lookup(&self, label: &str) -> RoutingResult<LocationId> {
        self.resolve(label)
            .ok_or_else(|| RoutingError::UnknownLabel(label.to_owned()))
    }

    fn route_between(&self, u: LocationId, v: LocationId) -> Option<Route> {
        let distance = self.distance(u, v)?;
        let labels = self
            .reconstruct(u, v)?
            .into_iter()
            .map(|id| self.labels[id.index()].clone())
            .collect();
        Some(Route { distance, labels })
    }

    #[inline]
    fn cell(&self, i: LocationId, j: LocationId) -> Option<usize> {
        (i.index() < self.n && j.index() < self.n).then(|| i.index() * self.n + j.index())
    }
}

// ── Floyd–Warshall internals ──────────────────────────────────────────────────

/// Run the `k` loop.  Row `k` cannot improve during iteration `k`
/// (`dist[k][k] == 0`), so it is copied once and every row `i` can be relaxed
/// independently against it.
fn relax_all(dist: &mut [u64], next: &mut [Option<LocationId>], n: usize) {
    if n == 0 {
        return;
    }
    let mut row_k = vec![UNREACHABLE; n];
    for k in 0..n {
        row_k.copy_from_slice(&dist[k * n..(k + 1) * n]);

        #[cfg(not(feature = "parallel"))]
        dist.chunks_mut(n)
            .zip(next.chunks_mut(n))
            .for_each(|(d, h)| relax_row(d, h, &row_k, k));

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            dist.par_chunks_mut(n)
                .zip(next.par_chunks_mut(n))
                .for_each(|(d, h)| relax_row(d, h, &row_k, k));
        }
    }
}

#[inline]
fn relax_row(dist_i: &mut [u64], next_i: &mut [Option<LocationId>], dist_k: &[u64], k: usize) {
    let d_ik = dist_i[k];
    if d_ik == UNREACHABLE {
        return;
    }
    let hop = next_i[k];
    for (j, &d_kj) in dist_k.iter().enumerate() {
        if d_kj == UNREACHABLE {
            continue;
        }
        let candidate = d_ik + d_kj;
        if candidate < dist_i[j] {
            dist_i[j] = candidate;
            next_i[j] = hop;
        }
    }
}
