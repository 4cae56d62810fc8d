// mkvtree-cli/src/main.rs
//
// Entry point for the mkvtree command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments with clap.
// - Setting up logging to stderr.
// - Dispatching to the selected command.
// - Mapping failures to an error message on stderr and exit code 1.

use clap::Parser;
use mkvtree_cli::logging::init_logging;
use mkvtree_cli::{Cli, Commands, run_fps, run_tracks, run_tree};
use std::io::{self, Write};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Fps(args) => run_fps(args, &mut out)?,
        Commands::Tracks(args) => run_tracks(args, &mut out)?,
        Commands::Tree(args) => run_tree(args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
