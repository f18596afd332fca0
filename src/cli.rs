//!
//! Interactive shell on top of the route engine.
//!
//! The menu loop reads from any `BufRead` and writes to any `Write`,
//! so the whole session can be driven from tests.
//!
use crate::common::{Cost, Weather};
use crate::graph::floyd::{all_shortest_paths, ShortestPaths};
use crate::graph::road_graph::{EdgeWeights, RoadGraph};
use itertools::Itertools;
use log::info;
use std::io::{BufRead, Write};

///
/// Session state: the graph, the active weather condition and the
/// matrices computed for them.
///
/// All mutations go through the session so the matrices are always
/// recomputed before the next query.
///
pub struct Session {
    graph: RoadGraph,
    weather: Weather,
    paths: ShortestPaths,
}

impl Session {
    pub fn new(graph: RoadGraph, weather: Weather) -> Self {
        let paths = all_shortest_paths(&graph, weather);
        Session {
            graph,
            weather,
            paths,
        }
    }
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }
    pub fn weather(&self) -> Weather {
        self.weather
    }
    pub fn paths(&self) -> &ShortestPaths {
        &self.paths
    }
    fn recompute(&mut self) {
        self.paths = all_shortest_paths(&self.graph, self.weather);
        info!(
            "recomputed routes for {} cities / {} roads under {}",
            self.graph.n_cities(),
            self.graph.n_roads(),
            self.weather
        );
    }
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
        self.recompute();
    }
    pub fn add_road(&mut self, from: &str, to: &str, weights: EdgeWeights) {
        self.graph.add_road(from, to, weights);
        self.recompute();
    }
    pub fn remove_road(&mut self, from: &str, to: &str) {
        self.graph.remove_road(from, to);
        self.recompute();
    }
    pub fn set_weather_cost(&mut self, from: &str, to: &str, weather: Weather, cost: Cost) {
        self.graph.set_weather_cost(from, to, weather, cost);
        self.recompute();
    }
    ///
    /// Shortest route and its total travel time under the active
    /// weather. `None` when either city is unknown or no route exists.
    ///
    pub fn route(&self, origin: &str, destination: &str) -> Option<(Vec<String>, Cost)> {
        let route = self.paths.path_between(&self.graph, origin, destination);
        if route.is_empty() {
            return None;
        }
        let v = self.graph.node(origin)?;
        let w = self.graph.node(destination)?;
        let cost = self.paths.dist(v, w)?;
        Some((route, cost))
    }
    /// name of the current graph center, if any city qualifies
    pub fn center(&self) -> Option<&str> {
        self.paths.center().and_then(|v| self.graph.city_name(v))
    }
}

/// prompt for one trimmed input line, `None` on EOF
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    msg: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", msg)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// EOF on stdin ends the session, so every prompt can bail out
macro_rules! prompt_or_return {
    ($input:expr, $output:expr, $msg:expr, $ret:expr) => {
        match prompt($input, $output, $msg)? {
            Some(line) => line,
            None => return $ret,
        }
    };
}

///
/// Run the menu loop until exit or EOF.
///
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Options:")?;
        writeln!(output, "1) Shortest route between two cities")?;
        writeln!(output, "2) Show the center city of the graph")?;
        writeln!(output, "3) Modify the graph")?;
        writeln!(output, "4) Exit")?;
        let option = prompt_or_return!(input, output, "Select option: ", Ok(()));

        match option.as_str() {
            "1" => {
                let origin = prompt_or_return!(input, output, "Origin city: ", Ok(()));
                let destination = prompt_or_return!(input, output, "Destination city: ", Ok(()));
                match session.route(&origin, &destination) {
                    Some((route, cost)) => writeln!(
                        output,
                        "Route: {} | cost ({}): {}",
                        route.iter().join(" -> "),
                        session.weather(),
                        cost
                    )?,
                    None => writeln!(output, "No route between those cities.")?,
                }
            }
            "2" => match session.center() {
                Some(center) => writeln!(output, "The center city is: {}", center)?,
                None => writeln!(output, "The graph has no center.")?,
            },
            "3" => {
                if !modify(session, input, output)? {
                    break;
                }
            }
            "4" => {
                writeln!(output, "Session finished.")?;
                break;
            }
            _ => writeln!(output, "Invalid option, try again.")?,
        }
    }
    Ok(())
}

///
/// The mutation submenu. Returns `Ok(false)` on EOF. Invalid input
/// aborts the action without touching the graph.
///
fn modify<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    writeln!(output, "a) Remove road")?;
    writeln!(output, "b) Add road")?;
    writeln!(output, "c) Change one weather time on a road")?;
    let action = prompt_or_return!(input, output, "Choose action: ", Ok(false));

    match action.to_lowercase().as_str() {
        "a" => {
            let c1 = prompt_or_return!(input, output, "City 1: ", Ok(false));
            let c2 = prompt_or_return!(input, output, "City 2: ", Ok(false));
            session.remove_road(&c1, &c2);
        }
        "b" => {
            let c1 = prompt_or_return!(input, output, "City 1: ", Ok(false));
            let c2 = prompt_or_return!(input, output, "City 2: ", Ok(false));
            let mut costs = [0; 4];
            for (weather, cost) in Weather::ALL.iter().zip(costs.iter_mut()) {
                let line =
                    prompt_or_return!(input, output, &format!("Time {}: ", weather), Ok(false));
                match line.parse() {
                    Ok(value) => *cost = value,
                    Err(_) => {
                        writeln!(output, "Invalid time, action cancelled.")?;
                        return Ok(true);
                    }
                }
            }
            session.add_road(
                &c1,
                &c2,
                EdgeWeights::new(costs[0], costs[1], costs[2], costs[3]),
            );
        }
        "c" => {
            let c1 = prompt_or_return!(input, output, "City 1: ", Ok(false));
            let c2 = prompt_or_return!(input, output, "City 2: ", Ok(false));
            let w = prompt_or_return!(
                input,
                output,
                "Weather (normal/rain/snow/storm): ",
                Ok(false)
            );
            let weather = match w.parse::<Weather>() {
                Ok(weather) => weather,
                Err(err) => {
                    writeln!(output, "{}, action cancelled.", err)?;
                    return Ok(true);
                }
            };
            let line = prompt_or_return!(input, output, "New time: ", Ok(false));
            match line.parse() {
                Ok(cost) => session.set_weather_cost(&c1, &c2, weather, cost),
                Err(_) => {
                    writeln!(output, "Invalid time, action cancelled.")?;
                    return Ok(true);
                }
            }
        }
        _ => {
            writeln!(output, "Invalid action.")?;
            return Ok(true);
        }
    }
    writeln!(output, "Graph updated, routes recomputed.")?;
    Ok(true)
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mocks;
    use std::io::Cursor;

    #[test]
    fn session_recomputes_after_mutation() {
        let mut s = Session::new(mocks::mock_relay(), Weather::Normal);
        let (route, cost) = s.route("A", "C").unwrap();
        assert_eq!(route, vec!["A", "B", "C"]);
        assert_eq!(cost, 3);

        // dropping B->C forces the direct road
        s.remove_road("B", "C");
        let (route, cost) = s.route("A", "C").unwrap();
        assert_eq!(route, vec!["A", "C"]);
        assert_eq!(cost, 10);

        // making the direct road cheap under rain changes the route
        s.set_weather(Weather::Rain);
        s.set_weather_cost("A", "C", Weather::Rain, 1);
        assert_eq!(s.route("A", "C").unwrap().1, 1);
    }

    #[test]
    fn session_route_on_unknown_city_is_none() {
        let s = Session::new(mocks::mock_relay(), Weather::Normal);
        assert_eq!(s.route("A", "Nowhere"), None);
        assert_eq!(s.route("Nowhere", "C"), None);
        assert_eq!(s.route("C", "A"), None); // no reverse roads
    }

    #[test]
    fn menu_route_query_and_exit() {
        let mut s = Session::new(mocks::mock_relay(), Weather::Normal);
        let mut input = Cursor::new("1\nA\nC\n4\n");
        let mut output = Vec::new();
        run(&mut s, &mut input, &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Route: A -> B -> C | cost (normal): 3"));
        assert!(out.contains("Session finished."));
    }

    #[test]
    fn menu_center_and_invalid_option() {
        let mut s = Session::new(mocks::mock_star(), Weather::Normal);
        let mut input = Cursor::new("9\n2\n4\n");
        let mut output = Vec::new();
        run(&mut s, &mut input, &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Invalid option"));
        assert!(out.contains("The center city is: X"));
    }

    #[test]
    fn menu_add_road_then_query() {
        let mut s = Session::new(mocks::mock_split(), Weather::Normal);
        // add B->Z (costs 2,2,2,2), then ask A->Z
        let mut input = Cursor::new("3\nb\nB\nZ\n2\n2\n2\n2\n1\nA\nZ\n4\n");
        let mut output = Vec::new();
        run(&mut s, &mut input, &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Graph updated, routes recomputed."));
        assert!(out.contains("Route: A -> B -> Z | cost (normal): 3"));
    }

    #[test]
    fn menu_rejects_bad_weather_name() {
        let mut s = Session::new(mocks::mock_relay(), Weather::Normal);
        let mut input = Cursor::new("3\nc\nA\nB\ntormenta\n4\n");
        let mut output = Vec::new();
        run(&mut s, &mut input, &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("action cancelled"));
        // record untouched
        let g = s.graph();
        let (a, b) = (g.node("A").unwrap(), g.node("B").unwrap());
        assert_eq!(g.weights(a, b), Some(&EdgeWeights::uniform(1)));
    }

    #[test]
    fn menu_eof_ends_session() {
        let mut s = Session::new(mocks::mock_relay(), Weather::Normal);
        let mut input = Cursor::new("1\nA\n");
        let mut output = Vec::new();
        run(&mut s, &mut input, &mut output).unwrap();
    }
}
