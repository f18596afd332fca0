//!
//! The city road network and its algorithms
//!
//! # Modules
//!
//! * `road_graph`: graph store and mutation API
//! * `floyd`: all-pairs shortest paths, route and center queries
//! * `mocks`: fixture graphs for tests
//!
pub mod floyd;
pub mod mocks;
pub mod road_graph;

pub use floyd::{all_shortest_paths, ShortestPaths};
pub use road_graph::{EdgeWeights, RoadGraph};
