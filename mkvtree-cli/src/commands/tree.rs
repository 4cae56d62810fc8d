// mkvtree-cli/src/commands/tree.rs
//
// Implementation of the `tree` command: dumps the parsed report as JSON so
// the intermediate structure can be inspected with external tooling.

use anyhow::Result;
use std::io::Write;

use crate::cli::TreeArgs;
use crate::config::ReportInput;

pub fn run_tree(args: &TreeArgs, out: &mut impl Write) -> Result<()> {
    let tree = ReportInput::from_args(&args.source)?.load()?;
    log::debug!("Report tree has {} nodes", tree.root().subtree_size());
    writeln!(out, "{}", tree.to_json(args.pretty)?)?;
    Ok(())
}
