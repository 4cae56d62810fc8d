// mkvtree-cli/src/commands/fps.rs
//
// Implementation of the `fps` command.

use anyhow::{Context, Result};
use mkvtree_core::Tree;
use std::io::Write;

use crate::cli::FpsArgs;
use crate::config::FpsConfig;

/// Validates the arguments, loads the report and prints the frame rates.
pub fn run_fps(args: &FpsArgs, out: &mut impl Write) -> Result<()> {
    let config = FpsConfig::from_args(args)?;
    log::debug!("fps configuration: {:?}", config);

    let tree = config.input.load()?;
    write_fps(&tree, &config, out)
}

/// Prints the frame rate of each requested track kind.
///
/// A single kind prints the bare value so it can be fed to other tools; more
/// than one prints `kind: value` lines.
pub fn write_fps(tree: &Tree, config: &FpsConfig, out: &mut impl Write) -> Result<()> {
    let labelled = config.kinds.len() > 1;
    for kind in config.kinds {
        let fps = tree
            .fps(config.scope, *kind)
            .with_context(|| format!("Could not determine the {} frame rate", kind))?;
        log::info!("{} track frame rate: {}", kind, fps);
        if labelled {
            writeln!(out, "{}: {}", kind, fps)?;
        } else {
            writeln!(out, "{}", fps)?;
        }
    }
    Ok(())
}
