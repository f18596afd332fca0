//!
//! `RoadGraph`: directed graph of cities whose roads carry one travel
//! time per weather condition.
//!
use crate::common::{Cost, NodeIndex, Weather};
use fnv::FnvHashMap;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

///
/// Travel times of a directed road under each weather condition.
///
/// One record exists per ordered city pair. Costs are stored as given,
/// zero or negative values are not rejected.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeWeights {
    pub normal: Cost,
    pub rain: Cost,
    pub snow: Cost,
    pub storm: Cost,
}

impl EdgeWeights {
    pub fn new(normal: Cost, rain: Cost, snow: Cost, storm: Cost) -> Self {
        EdgeWeights {
            normal,
            rain,
            snow,
            storm,
        }
    }
    ///
    /// Same travel time under every condition, handy for fixtures.
    ///
    pub fn uniform(cost: Cost) -> Self {
        EdgeWeights::new(cost, cost, cost, cost)
    }
    /// travel time active under the given condition
    pub fn cost(&self, weather: Weather) -> Cost {
        match weather {
            Weather::Normal => self.normal,
            Weather::Rain => self.rain,
            Weather::Snow => self.snow,
            Weather::Storm => self.storm,
        }
    }
    /// overwrite the travel time of a single condition
    pub fn set_cost(&mut self, weather: Weather, cost: Cost) {
        match weather {
            Weather::Normal => self.normal = cost,
            Weather::Rain => self.rain = cost,
            Weather::Snow => self.snow = cost,
            Weather::Storm => self.storm = cost,
        }
    }
}

///
/// Directed city graph.
///
/// Cities get a dense `NodeIndex` in order of first registration and
/// are never removed, so indices stay stable for the process lifetime.
/// Mutations never create self-loops.
///
/// Mutating the graph invalidates any previously computed
/// [`ShortestPaths`](crate::graph::floyd::ShortestPaths) snapshot; the
/// caller re-runs the engine afterwards.
///
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    graph: DiGraph<String, EdgeWeights>,
    indices: FnvHashMap<String, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        RoadGraph::default()
    }
    pub fn n_cities(&self) -> usize {
        self.graph.node_count()
    }
    pub fn n_roads(&self) -> usize {
        self.graph.edge_count()
    }
    /// index of a registered city
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }
    /// name of a registered city
    pub fn city_name(&self, node: NodeIndex) -> Option<&str> {
        self.graph.node_weight(node).map(|name| name.as_str())
    }
    ///
    /// iterator over city names in registration (= index) order
    ///
    pub fn city_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(|name| name.as_str())
    }
    ///
    /// iterator over all roads as `(from, to, weights)`
    ///
    pub fn roads(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &EdgeWeights)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }
    /// weight record of the directed road `from -> to`, if any
    pub fn weights(&self, from: NodeIndex, to: NodeIndex) -> Option<&EdgeWeights> {
        self.graph
            .find_edge(from, to)
            .and_then(|e| self.graph.edge_weight(e))
    }
    ///
    /// Register a city, a no-op when the name is already known.
    ///
    pub fn add_city(&mut self, name: &str) -> NodeIndex {
        match self.indices.get(name) {
            Some(&node) => node,
            None => {
                let node = self.graph.add_node(name.to_string());
                self.indices.insert(name.to_string(), node);
                node
            }
        }
    }
    ///
    /// Add the directed road `from -> to`, replacing the whole weight
    /// record when the road already exists. Both cities are registered
    /// as a side effect. Self-loops are not created.
    ///
    pub fn add_road(&mut self, from: &str, to: &str, weights: EdgeWeights) {
        let v = self.add_city(from);
        let w = self.add_city(to);
        if v != w {
            self.graph.update_edge(v, w, weights);
        }
    }
    ///
    /// Remove the directed road `from -> to`. A no-op when either city
    /// is unknown or the road does not exist.
    ///
    pub fn remove_road(&mut self, from: &str, to: &str) {
        if let (Some(v), Some(w)) = (self.node(from), self.node(to)) {
            if let Some(e) = self.graph.find_edge(v, w) {
                self.graph.remove_edge(e);
            }
        }
    }
    ///
    /// Overwrite the travel time of one condition on an existing road.
    /// A no-op when either city is unknown or the road does not exist.
    ///
    pub fn set_weather_cost(&mut self, from: &str, to: &str, weather: Weather, cost: Cost) {
        if let (Some(v), Some(w)) = (self.node(from), self.node(to)) {
            if let Some(e) = self.graph.find_edge(v, w) {
                if let Some(weights) = self.graph.edge_weight_mut(e) {
                    weights.set_cost(weather, cost);
                }
            }
        }
    }
}

//
// tests
//
