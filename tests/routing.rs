//!
//! End-to-end tests: data file -> graph -> all-pairs routes -> queries
//!
use logistica::cli::Session;
use logistica::common::{ni, Weather};
use logistica::graph::floyd::all_shortest_paths;
use logistica::graph::mocks;
use logistica::graph::road_graph::EdgeWeights;
use logistica::io::edge_list;
use std::io::Write;

fn data_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn load_compute_query() {
    let file = data_file("A B 5 6 7 8\nB C 3 4 5 6\nA C 10 11 12 13\n");
    let graph = edge_list::from_file(file.path()).unwrap();
    assert_eq!(graph.n_cities(), 3);
    // weight fields match the input tokens verbatim
    let w = graph.weights(ni(0), ni(1)).unwrap();
    assert_eq!(*w, EdgeWeights::new(5, 6, 7, 8));

    let sp = all_shortest_paths(&graph, Weather::Normal);
    assert_eq!(sp.path_between(&graph, "A", "C"), vec!["A", "B", "C"]);
    assert_eq!(sp.dist(ni(0), ni(2)), Some(8));
}

#[test]
fn missing_file_is_reported_not_fatal() {
    let err = edge_list::from_file("no_such_roads.txt").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn malformed_lines_are_tolerated() {
    let file = data_file("A B 1 1 1 1\nB C 9 9 9\n");
    let graph = edge_list::from_file(file.path()).unwrap();
    assert_eq!(graph.n_cities(), 2);
    assert_eq!(graph.n_roads(), 1);
}

#[test]
fn remove_then_re_add_restores_reachability() {
    let mut session = Session::new(mocks::mock_relay(), Weather::Normal);
    session.remove_road("B", "C");
    session.remove_road("A", "C");
    assert_eq!(session.route("A", "C"), None);

    session.add_road("B", "C", EdgeWeights::uniform(4));
    let (route, cost) = session.route("A", "C").unwrap();
    assert_eq!(route, vec!["A", "B", "C"]);
    assert_eq!(cost, 5);
}

#[test]
fn center_follows_the_weather() {
    let mut session = Session::new(mocks::mock_star(), Weather::Normal);
    assert_eq!(session.center(), Some("X"));

    session.set_weather(Weather::Storm);
    assert_eq!(session.center(), Some("X"));

    // X->A becomes very slow under storm: every route into A now costs
    // 100+, so A itself (which still exits cheaply) takes over
    session.set_weather_cost("X", "A", Weather::Storm, 100);
    assert_eq!(session.center(), Some("A"));

    // back under normal weather the star is symmetric again
    session.set_weather(Weather::Normal);
    assert_eq!(session.center(), Some("X"));
}
