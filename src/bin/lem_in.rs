//! `lem-in` CLI
//!
//! Reads an ant-farm description from a file, echoes the input, then
//! prints one line per turn of ant moves. On a parse or validation
//! error, prints `ERROR: invalid data format` and exits 1. When no
//! path exists between start and end, prints the `no path found`
//! variant of that message and exits 0 — that outcome is a valid
//! answer, not a failure of the program.

use clap::Parser;
use lemin_core::{format, parser, pipeline, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Route ants through an ant farm in the fewest turns.
#[derive(Parser)]
#[command(name = "lem-in")]
#[command(author, version, about = "Vertex-disjoint ant routing")]
struct Args {
    /// Path to the ant-farm description file
    input_file: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let contents = std::fs::read_to_string(&args.input_file)
        .map_err(|e| anyhow::anyhow!("reading {}: {e}", args.input_file))?;

    match run(&contents) {
        Ok(()) => Ok(()),
        Err(Error::NoPath) => {
            println!("{}", Error::NoPath.user_message());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

fn run(contents: &str) -> lemin_core::Result<()> {
    let parsed = parser::parse(contents)?;
    for line in &parsed.echo {
        println!("{line}");
    }
    println!();

    let turns = pipeline::solve(&parsed.graph, parsed.ants)?;
    for line in format::format_turns(&parsed.graph, &turns) {
        println!("{line}");
    }
    Ok(())
}
