// ============================================================================
// mkvtree-cli/src/config.rs
// ============================================================================
//
// CONFIGURATION: Validated Run Configuration for the CLI
//
// Parsed command-line arguments are turned into explicit configuration values
// here and validated before any core call is made. Nothing in the CLI reads
// arguments or environment state after this point.
//
// AI-ASSISTANT-INFO: Default constants and validated configuration for mkvtree-cli

use anyhow::{Context, Result, bail};
use mkvtree_core::external::{MkvinfoExecutor, ReportExecutor};
use mkvtree_core::{TrackKind, TrackScope, Tree, parse_reader};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::cli::{FpsArgs, ScopeArg, SourceArgs, TrackArg};

/// Default mkvinfo binary name.
pub const DEFAULT_MKVINFO: &str = mkvtree_core::external::DEFAULT_MKVINFO;

/// Environment variable overriding the mkvinfo binary.
pub const MKVINFO_ENV: &str = "MKVTREE_MKVINFO";

/// Report path meaning "read standard input".
pub const STDIN_REPORT: &str = "-";

// ============================================================================
// REPORT INPUT
// ============================================================================

/// Where the report text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportInput {
    /// Run mkvinfo on a media file.
    MediaFile { path: PathBuf, mkvinfo: String },
    /// A saved report on disk.
    ReportFile(PathBuf),
    /// A report piped in on stdin.
    Stdin,
}

impl ReportInput {
    /// Validates the source arguments: exactly one source, and any named file
    /// must exist and be a regular file.
    pub fn from_args(args: &SourceArgs) -> Result<Self> {
        match (&args.input, &args.report) {
            (Some(_), Some(_)) => bail!("Specify either an input file or --report, not both"),
            (None, None) => bail!("No input given: pass a Matroska file or --report"),
            (None, Some(report)) if report.as_os_str() == STDIN_REPORT => Ok(ReportInput::Stdin),
            (None, Some(report)) => {
                ensure_file(report, "report")?;
                Ok(ReportInput::ReportFile(report.clone()))
            }
            (Some(input), None) => {
                ensure_file(input, "input")?;
                if args.mkvinfo.trim().is_empty() {
                    bail!("mkvinfo binary name must not be empty");
                }
                Ok(ReportInput::MediaFile {
                    path: input.clone(),
                    mkvinfo: args.mkvinfo.clone(),
                })
            }
        }
    }

    /// Reads and parses the report.
    pub fn load(&self) -> Result<Tree> {
        match self {
            ReportInput::MediaFile { path, mkvinfo } => {
                log::info!("Running {} on {}", mkvinfo, path.display());
                MkvinfoExecutor::with_program(mkvinfo.as_str())
                    .report_tree(path)
                    .with_context(|| format!("Failed to read report for '{}'", path.display()))
            }
            ReportInput::ReportFile(path) => {
                log::info!("Reading report from {}", path.display());
                let file = File::open(path)
                    .with_context(|| format!("Failed to open report '{}'", path.display()))?;
                parse_reader(BufReader::new(file))
                    .with_context(|| format!("Failed to parse report '{}'", path.display()))
            }
            ReportInput::Stdin => {
                log::info!("Reading report from stdin");
                parse_reader(io::stdin().lock()).context("Failed to parse report from stdin")
            }
        }
    }
}

fn ensure_file(path: &Path, what: &str) -> Result<()> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Invalid {} path '{}'", what, path.display()))?;
    if !metadata.is_file() {
        bail!("Invalid {} path '{}': not a file", what, path.display());
    }
    Ok(())
}

// ============================================================================
// TRACK SELECTION
// ============================================================================

impl ScopeArg {
    pub fn to_scope(self) -> TrackScope {
        match self {
            ScopeArg::TopLevel => TrackScope::TopLevel,
            ScopeArg::Anywhere => TrackScope::Anywhere,
        }
    }
}

impl TrackArg {
    /// Track kinds to report, in output order.
    pub fn kinds(self) -> &'static [TrackKind] {
        match self {
            TrackArg::Video => &[TrackKind::Video],
            TrackArg::Audio => &[TrackKind::Audio],
            TrackArg::Both => &[TrackKind::Video, TrackKind::Audio],
        }
    }
}

/// Configuration for the `fps` command.
#[derive(Debug, Clone)]
pub struct FpsConfig {
    pub input: ReportInput,
    pub kinds: &'static [TrackKind],
    pub scope: TrackScope,
}

impl FpsConfig {
    pub fn from_args(args: &FpsArgs) -> Result<Self> {
        Ok(Self {
            input: ReportInput::from_args(&args.source)?,
            kinds: args.track.kinds(),
            scope: args.scope.to_scope(),
        })
    }
}
