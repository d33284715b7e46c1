//! Converts a graph6 graph on stdin to the plain text format on stdout.

use std::io::{self, Read};

use dgon_io::{Graph6Reader, PlainTextWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let graph = Graph6Reader::read(input.trim())?;

    PlainTextWriter::write(io::stdout(), None, &graph)?;
    Ok(())
}
