// mkvtree-cli/src/commands/tracks.rs
//
// Implementation of the `tracks` command.

use anyhow::Result;
use mkvtree_core::{TrackSummary, track_summaries};
use std::io::Write;

use crate::cli::TracksArgs;
use crate::config::ReportInput;

pub fn run_tracks(args: &TracksArgs, out: &mut impl Write) -> Result<()> {
    let input = ReportInput::from_args(&args.source)?;
    let tree = input.load()?;
    let summaries = track_summaries(&tree, args.scope.to_scope())?;
    log::debug!("Found {} tracks", summaries.len());

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else {
        write_table(&summaries, out)?;
    }
    Ok(())
}

/// One line per track: number, type, codec and frame rate, "-" for gaps.
pub fn write_table(summaries: &[TrackSummary], out: &mut impl Write) -> Result<()> {
    for summary in summaries {
        writeln!(
            out,
            "#{:<3} {:<10} {:<20} {}",
            summary.number.as_deref().unwrap_or("-"),
            summary.track_type.as_deref().unwrap_or("-"),
            summary.codec_id.as_deref().unwrap_or("-"),
            summary
                .fps
                .as_deref()
                .map(|fps| format!("{} fps", fps))
                .unwrap_or_else(|| "-".to_string()),
        )?;
    }
    Ok(())
}
