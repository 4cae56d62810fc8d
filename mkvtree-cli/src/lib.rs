// mkvtree-cli/src/lib.rs
//
// Library portion of the mkvtree CLI application.
// Contains argument definitions, configuration and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, FpsArgs, TracksArgs, TreeArgs};
pub use commands::fps::run_fps;
pub use commands::tracks::run_tracks;
pub use commands::tree::run_tree;
