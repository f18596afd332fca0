use clap::Parser;
use log::info;
use logistica::cli::{run, Session};
use logistica::common::Weather;
use logistica::io::edge_list;

///
/// Interactive route planner over a weather-dependent city graph.
///
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Opts {
    /// Road data file, one directed road per line:
    /// `city1 city2 normalTime rainTime snowTime stormTime`
    #[clap(default_value = "logistica.txt")]
    file: std::path::PathBuf,
    /// Weather condition used for route computations
    #[clap(short, long, default_value = "normal")]
    weather: Weather,
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let graph = match edge_list::from_file(&opts.file) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Error: cannot read '{}': {}", opts.file.display(), err);
            return Ok(());
        }
    };
    info!(
        "loaded {} cities and {} roads from {}",
        graph.n_cities(),
        graph.n_roads(),
        opts.file.display()
    );

    let mut session = Session::new(graph, opts.weather);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut session, &mut stdin.lock(), &mut stdout.lock())
}
