//!
//! Edge list parser.
//!
//! One directed road per line, six whitespace-separated tokens:
//!
//! ```text
//! city1 city2 normalTime rainTime snowTime stormTime
//! ```
//!
//! A line does not create the reverse road.
//!
use crate::graph::road_graph::{EdgeWeights, RoadGraph};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

///
/// Parse a single data line into `(from, to, weights)`.
///
/// `None` when the line does not have exactly six tokens or a cost is
/// not an integer.
///
pub fn parse_line(line: &str) -> Option<(&str, &str, EdgeWeights)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        [from, to, normal, rain, snow, storm] => {
            let weights = EdgeWeights::new(
                normal.parse().ok()?,
                rain.parse().ok()?,
                snow.parse().ok()?,
                storm.parse().ok()?,
            );
            Some((from, to, weights))
        }
        _ => None,
    }
}

///
/// Load roads from a reader into the graph. Malformed lines are
/// skipped with a warning (tolerant ingestion policy).
///
pub fn load<R: BufRead>(reader: R, graph: &mut RoadGraph) -> std::io::Result<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some((from, to, weights)) => graph.add_road(from, to, weights),
            None => {
                if !line.trim().is_empty() {
                    warn!("skipping malformed line {}: {:?}", i + 1, line);
                }
            }
        }
    }
    Ok(())
}

///
/// Build a graph from a data file. A missing or unreadable file
/// surfaces as the `io::Error`, no partial graph escapes.
///
pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<RoadGraph> {
    let file = File::open(path)?;
    let mut graph = RoadGraph::new();
    load(BufReader::new(file), &mut graph)?;
    Ok(graph)
}

//
// tests
//
