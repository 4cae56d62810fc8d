// ============================================================================
// mkvtree-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Obtaining Reports from mkvinfo
//
// This module encapsulates the interaction with the external `mkvinfo` tool.
// The ReportExecutor trait is the seam consumers use to obtain a parsed report
// for a media file; MkvinfoExecutor is the default implementation, which
// spawns the binary and streams its output into the tree builder.
//
// AI-ASSISTANT-INFO: External tool interaction for mkvinfo reports

/// Contains the trait and implementation for executing mkvinfo
pub mod mkvinfo_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use mkvinfo_executor::{DEFAULT_MKVINFO, MkvinfoExecutor, ReportExecutor};
