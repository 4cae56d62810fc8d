// ============================================================================
// mkvtree-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for mkvtree-core
//
// This module defines the error types used throughout the mkvtree-core library.
// It provides a centralized error enum and a Result type alias for consistent
// error handling across the parser, the query layer and the report sources.
//
// KEY COMPONENTS:
// - CoreError: Enum of all possible errors in the library
// - CoreResult: Type alias for Result with CoreError
// - Helper constructors for external command failures
//
// AI-ASSISTANT-INFO: Error handling for mkvtree-core

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors produced by the report parser, the tree queries and the report sources.
///
/// Each failure the core can detect maps to exactly one variant so callers can
/// report which expectation about the report was violated.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Parser Errors ----
    /// A line implies a depth relationship the builder cannot resolve, i.e. the
    /// open-node stack ran out while looking for the node to attach to.
    #[error("Malformed report at line {line}: no open parent for '{name}' at depth {depth}")]
    Structure {
        line: usize,
        depth: usize,
        name: String,
    },

    /// An escaped field name could not be decoded back into UTF-8 text.
    #[error("Invalid field name: {0}")]
    InvalidFieldName(String),

    // ---- Query Errors ----
    /// No track nodes exist, or none of the requested type.
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// A track exists but lacks the duration field or a recognizable frame rate.
    #[error("Invalid track: {0}")]
    InvalidTrack(String),

    // ---- Report Source Errors ----
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Required external command '{0}' not found or failed to execute")]
    DependencyNotFound(String),

    #[error("Failed to execute {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Command {0} failed with status {1}. Stderr: {2}")]
    CommandFailed(String, ExitStatus, String),
}

impl CoreError {
    /// Returns true for [`CoreError::TrackNotFound`].
    pub fn is_track_not_found(&self) -> bool {
        matches!(self, CoreError::TrackNotFound(_))
    }

    /// Returns true for [`CoreError::InvalidTrack`].
    pub fn is_invalid_track(&self) -> bool {
        matches!(self, CoreError::InvalidTrack(_))
    }
}

/// Type alias for Result with CoreError.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a CommandStart error for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, error: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), error)
}

/// Creates a CommandFailed error for a command that exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(command.into(), status, stderr.into())
}
