//!
//! Fixture road graphs used across the test suite.
//!
use super::road_graph::{EdgeWeights, RoadGraph};

///
/// Relay graph: A->B (1), B->C (2) and a direct A->C (10).
/// All weather conditions share the same cost.
///
pub fn mock_relay() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.add_road("A", "B", EdgeWeights::uniform(1));
    g.add_road("B", "C", EdgeWeights::uniform(2));
    g.add_road("A", "C", EdgeWeights::uniform(10));
    g
}

///
/// Relay graph with per-condition costs:
///
/// ```text
/// A -> B  (5, 6, 7, 8)
/// B -> C  (3, 4, 5, 6)
/// A -> C  (10, 11, 12, 13)
/// ```
///
/// Under normal weather the relay through B wins, under storm the
/// direct road does.
///
pub fn mock_weathered() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.add_road("A", "B", EdgeWeights::new(5, 6, 7, 8));
    g.add_road("B", "C", EdgeWeights::new(3, 4, 5, 6));
    g.add_road("A", "C", EdgeWeights::new(10, 11, 12, 13));
    g
}

///
/// Star graph: hub X connected both ways to A, B and C at cost 1.
/// X is the center (eccentricity 1, leaves have 2).
///
pub fn mock_star() -> RoadGraph {
    let mut g = RoadGraph::new();
    for leaf in &["A", "B", "C"] {
        g.add_road("X", leaf, EdgeWeights::uniform(1));
        g.add_road(leaf, "X", EdgeWeights::uniform(1));
    }
    g
}

///
/// One road A->B plus an isolated city Z.
///
pub fn mock_split() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.add_road("A", "B", EdgeWeights::uniform(1));
    g.add_city("Z");
    g
}
