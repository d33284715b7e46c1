//! Checks whether subdividing a graph preserves its divisorial gonality, as
//! the subdivision conjecture predicts it should.

use std::io::{self, Read};

use clap::Parser;
use dgon::find_gonality;
use dgon_core::WorkContext;
use dgon_io::{subdivide, Graph6Reader, PlainTextReader};
use log::info;

/// Computes dgon(G) and dgon(subdivide(G, k)) and reports whether they match.
#[derive(Parser, Debug)]
struct Args {
    /// Read the graph in graph6 format instead of the plain text format.
    #[arg(short = 'g')]
    graph6: bool,

    /// Treat a mismatch as a hard failure (exit code 1) instead of a
    /// reported observation.
    #[arg(short = 'f')]
    fail_on_mismatch: bool,

    /// Raise log verbosity. Repeatable.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subdivision factor.
    #[arg(default_value_t = 2)]
    k: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let graph = if args.graph6 {
        Graph6Reader::read(input.trim())?
    } else {
        PlainTextReader::read(input.as_bytes())?.1
    };

    let mut ctx = WorkContext::new(graph.node_count());
    let original = find_gonality(&graph, &mut ctx);

    let subdivided = subdivide(&graph, args.k);
    let mut sub_ctx = WorkContext::new(subdivided.node_count());
    let after = find_gonality(&subdivided, &mut sub_ctx);

    info!("dgon(G) = {original}, dgon(subdivide(G, {})) = {after}", args.k);
    println!("{original} {after}");

    if original != after {
        println!("mismatch: subdivision conjecture does not hold for this instance");
        if args.fail_on_mismatch {
            std::process::exit(1);
        }
    } else {
        println!("match");
    }

    Ok(())
}
