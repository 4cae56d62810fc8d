//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Commands
//! write their results to the given writer and leave logging to the `log`
//! macros, so stdout only ever carries command output.

/// Module containing the implementation of the `fps` command.
/// This command prints the frame rate of the video and/or audio track.
pub mod fps;

/// Module containing the implementation of the `tracks` command.
pub mod tracks;

/// Module containing the implementation of the `tree` command.
pub mod tree;
