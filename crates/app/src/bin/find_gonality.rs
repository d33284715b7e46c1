//! Reads a graph from stdin and prints its divisorial gonality.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use dgon::{find_all_positive_rank_v0_reduced_divisors, find_gonality, find_positive_rank_divisor};
use dgon_core::WorkContext;
use dgon_io::{subdivide, Graph6Reader, PlainTextReader};
use log::info;

/// Computes the divisorial gonality of a graph read from standard input.
#[derive(Parser, Debug)]
struct Args {
    /// Read the graph in graph6 format instead of the plain text format.
    #[arg(short = 'g')]
    graph6: bool,

    /// Enumerate and print every positive-rank v0-reduced divisor of the
    /// minimal degree, instead of just one witness.
    #[arg(short = 'a')]
    all_witnesses: bool,

    /// Raise log verbosity. Repeatable.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subdivide the input graph this many-fold before computing gonality.
    k: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let graph = if args.graph6 {
        Graph6Reader::read(input.trim())?
    } else {
        PlainTextReader::read(input.as_bytes())?.1
    };

    let graph = match args.k {
        Some(k) => subdivide(&graph, k),
        None => graph,
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        })?;
    }

    let mut ctx = WorkContext::new(graph.node_count());

    if args.all_witnesses {
        let gonality = find_gonality(&graph, &mut ctx);
        println!("gonality: {gonality}");
        find_all_positive_rank_v0_reduced_divisors(&graph, gonality, &mut ctx, |divisor| {
            println!("{divisor}");
            !interrupted.load(Ordering::SeqCst)
        });
    } else {
        let n = graph.node_count() as u32;
        let mut gonality = None;
        for d in 1..=n {
            if interrupted.load(Ordering::SeqCst) {
                info!("interrupted at degree {d}");
                break;
            }
            if let Some(witness) = find_positive_rank_divisor(&graph, d, &mut ctx) {
                println!("gonality: {d}");
                println!("{witness}");
                gonality = Some(d);
                break;
            }
        }
        if gonality.is_none() {
            eprintln!("search interrupted before a witness was found");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();
}
