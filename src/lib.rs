//!
//! logistica: all-pairs shortest routes between cities with
//! weather-dependent travel times.
//!
//! The graph store lives in [`graph::road_graph`], the Floyd-Warshall
//! engine and the route/center queries in [`graph::floyd`], data-file
//! ingestion in [`io::edge_list`] and the interactive shell in
//! [`cli`].
//!
pub mod cli;
pub mod common;
pub mod graph;
pub mod io;
