//! Spawns the external `geng` generator (nauty/gtools) and checks the
//! Brill-Noether bound, via the independent-set certificate, on every graph
//! it produces.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use clap::Parser;
use dgon::brill_noether_certificate;
use dgon_core::WorkContext;
use dgon_io::Graph6Reader;
use log::{info, warn};

/// Runs `geng n [res/mod]` and checks the Brill-Noether certificate on every
/// graph it emits.
#[derive(Parser, Debug)]
struct Args {
    /// Require geng to only generate connected graphs.
    #[arg(short = 'C')]
    connected_only: bool,

    /// Skip graphs geng reports as having more than a simple edge between
    /// two vertices. geng itself never emits multigraphs (graph6 cannot
    /// represent them); this flag is a defensive no-op kept for symmetry
    /// with the other ingestion paths.
    #[arg(short = 'm')]
    skip_multigraphs: bool,

    /// Suppress geng's own progress output on stderr.
    #[arg(short = 'q')]
    quiet: bool,

    /// Raise log verbosity. Repeatable.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of vertices to generate.
    n: usize,

    /// Optional "res/mod" pair, passed through to geng to split generation
    /// across multiple invocations.
    res_mod: Option<String>,
}

const INDEPENDENT_SET_ATTEMPTS: u32 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    let mut command = Command::new("geng");
    if args.connected_only {
        command.arg("-c");
    }
    if args.quiet {
        command.arg("-q");
    }
    command.arg(args.n.to_string());
    if let Some(res_mod) = &args.res_mod {
        command.arg(res_mod);
    }
    command.stdout(Stdio::piped());

    let mut child = command.spawn().map_err(|e| format!("failed to spawn geng: {e}"))?;
    let stdout = child.stdout.take().expect("piped stdout");
    let reader = BufReader::new(stdout);

    let mut checked = 0usize;
    let mut certified = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let graph = match Graph6Reader::read(&line) {
            Ok(graph) => graph,
            Err(e) => {
                warn!("skipping unparsable line {line:?}: {e}");
                continue;
            }
        };

        checked += 1;
        let mut ctx = WorkContext::new(graph.node_count());
        if brill_noether_certificate(&graph, INDEPENDENT_SET_ATTEMPTS, &mut ctx) {
            certified += 1;
            println!("{line}");
        }
    }

    let status = child.wait()?;
    info!("geng exited with {status}; checked {checked} graphs, {certified} certified");

    if !status.success() {
        return Err(format!("geng exited with {status}").into());
    }

    Ok(())
}
