//!
//! Floyd-Warshall algorithm
//! to find shortest routes between all city pairs under one weather
//! condition, with a next-hop matrix for route reconstruction.
//!
use super::road_graph::RoadGraph;
use crate::common::{ni, Cost, NodeIndex, Weather};

///
/// All-pairs result for one weather condition.
///
/// `dists[i][j] = min travel time from i to j` (`None` = unreachable)
/// `nexts[i][j] = next hop from i toward j` (`None` = disconnected)
///
/// Invariants: `dists[i][i] == Some(0)`, `nexts[i][i] == Some(i)`, and
/// the next-hop matrix encodes a shortest-path tree (no cycles).
///
/// A snapshot of the graph at computation time. It is not updated on
/// mutation, recompute with [`all_shortest_paths`] instead.
///
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    dists: Vec<Vec<Option<Cost>>>,
    nexts: Vec<Vec<Option<NodeIndex>>>,
}

///
/// Run Floyd-Warshall over the graph with the travel times of the
/// given weather condition.
///
/// Always produces full matrices; unreachable pairs stay `None`.
/// Sums saturate, so unrealistically large costs cannot wrap into a
/// fake shortcut. Negative cycles are not detected.
///
pub fn all_shortest_paths(graph: &RoadGraph, weather: Weather) -> ShortestPaths {
    let n = graph.n_cities();

    // (1) Initialize: self rows are free, everything else unreachable
    let mut dists = vec![vec![None; n]; n];
    let mut nexts = vec![vec![None; n]; n];
    for i in 0..n {
        dists[i][i] = Some(0);
        nexts[i][i] = Some(ni(i));
    }

    // (2) Seed direct roads (at most one record per ordered pair,
    // never a self-loop)
    for (v, w, weights) in graph.roads() {
        dists[v.index()][w.index()] = Some(weights.cost(weather));
        nexts[v.index()][w.index()] = Some(w);
    }

    // (3) Relaxation
    for k in 0..n {
        for i in 0..n {
            if let Some(d_ik) = dists[i][k] {
                for j in 0..n {
                    if let Some(d_kj) = dists[k][j] {
                        let via_k = d_ik.saturating_add(d_kj);
                        if dists[i][j].map_or(true, |d_ij| via_k < d_ij) {
                            dists[i][j] = Some(via_k);
                            nexts[i][j] = nexts[i][k];
                        }
                    }
                }
            }
        }
    }

    ShortestPaths { dists, nexts }
}

impl ShortestPaths {
    /// number of cities the matrices were computed for
    pub fn n_cities(&self) -> usize {
        self.dists.len()
    }
    /// minimum travel time `from -> to`, `None` when unreachable
    pub fn dist(&self, from: NodeIndex, to: NodeIndex) -> Option<Cost> {
        *self.dists.get(from.index())?.get(to.index())?
    }
    /// next hop on a shortest route `from -> to`
    pub fn next(&self, from: NodeIndex, to: NodeIndex) -> Option<NodeIndex> {
        *self.nexts.get(from.index())?.get(to.index())?
    }
    ///
    /// Reconstruct the shortest route `from -> to` (inclusive) by
    /// following next-hop pointers. Empty when the pair is
    /// disconnected or out of range.
    ///
    pub fn path(&self, from: NodeIndex, to: NodeIndex) -> Vec<NodeIndex> {
        if self.next(from, to).is_none() {
            return Vec::new();
        }
        let mut path = vec![from];
        let mut v = from;
        while v != to {
            match self.next(v, to) {
                Some(w) => {
                    v = w;
                    path.push(w);
                }
                None => return Vec::new(),
            }
        }
        path
    }
    ///
    /// Name-level route reconstruction. Empty when either city is
    /// unknown or no route exists.
    ///
    pub fn path_between(&self, graph: &RoadGraph, origin: &str, destination: &str) -> Vec<String> {
        match (graph.node(origin), graph.node(destination)) {
            (Some(v), Some(w)) => self
                .path(v, w)
                .iter()
                .filter_map(|&u| graph.city_name(u))
                .map(|name| name.to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
    ///
    /// Maximum travel time from `v` to any *other* reachable city.
    /// `None` when `v` reaches no other city (isolated), so an
    /// isolated city can never win the center.
    ///
    pub fn eccentricity(&self, v: NodeIndex) -> Option<Cost> {
        let i = v.index();
        let row = self.dists.get(i)?;
        row.iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .filter_map(|(_, &d)| d)
            .max()
    }
    ///
    /// The city minimizing eccentricity, ties broken by the smallest
    /// index. `None` when no city has a finite eccentricity.
    ///
    pub fn center(&self) -> Option<NodeIndex> {
        (0..self.n_cities())
            .filter_map(|i| self.eccentricity(ni(i)).map(|e| (e, i)))
            .min()
            .map(|(_, i)| ni(i))
    }
}

//
// tests
//
