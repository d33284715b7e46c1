//! Converts a plain text graph on stdin to graph6 on stdout, optionally
//! subdividing it first.

use std::io::{self, Read};

use clap::Parser;
use dgon_io::{subdivide, Graph6Writer, PlainTextReader};

#[derive(Parser, Debug)]
struct Args {
    /// Subdivide the graph this many-fold before encoding.
    k: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let (_, graph) = PlainTextReader::read(input.as_bytes())?;

    let graph = match args.k {
        Some(k) => subdivide(&graph, k),
        None => graph,
    };

    println!("{}", Graph6Writer::write(&graph)?);
    Ok(())
}
