// mkvtree-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_MKVINFO, MKVINFO_ENV};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mkvtree: Matroska report inspector",
    long_about = "Parses mkvinfo text reports into a tree and extracts track frame rates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the frame rate of the video and/or audio track
    Fps(FpsArgs),
    /// Lists every track with its number, type, codec and frame rate
    Tracks(TracksArgs),
    /// Dumps the parsed report tree as JSON
    Tree(TreeArgs),
}

/// Where the report comes from. Exactly one of INPUT or --report is required.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Matroska file to run mkvinfo on
    #[arg(value_name = "INPUT", required_unless_present = "report", conflicts_with = "report")]
    pub input: Option<PathBuf>,

    /// Read a saved mkvinfo report instead of running mkvinfo ("-" for stdin)
    #[arg(long, value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// mkvinfo binary to run
    #[arg(long, value_name = "BIN", env = MKVINFO_ENV, default_value = DEFAULT_MKVINFO)]
    pub mkvinfo: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackArg {
    Video,
    Audio,
    /// Video first, then audio, one "type: fps" line each
    Both,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    /// Only top-level "A track" entries
    TopLevel,
    /// "A track" entries at any depth (full mkvinfo output)
    Anywhere,
}

#[derive(Args, Debug)]
pub struct FpsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Which track's frame rate to print
    #[arg(short, long, value_enum, default_value_t = TrackArg::Video)]
    pub track: TrackArg,

    /// Where to look for track entries; mkvinfo nests them under "Segment tracks"
    #[arg(long, value_enum, default_value_t = ScopeArg::Anywhere)]
    pub scope: ScopeArg,
}

#[derive(Args, Debug)]
pub struct TracksArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where to look for track entries; mkvinfo nests them under "Segment tracks"
    #[arg(long, value_enum, default_value_t = ScopeArg::Anywhere)]
    pub scope: ScopeArg,

    /// Print the track list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}
