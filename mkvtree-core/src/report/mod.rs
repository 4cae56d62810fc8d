// ============================================================================
// mkvtree-core/src/report/mod.rs
// ============================================================================
//
// REPORT PARSING: From mkvinfo Text to a Tree
//
// This module turns the indentation-delimited text report printed by mkvinfo
// into a Tree of named nodes.
//
// KEY COMPONENTS:
// - line: per-line classification (depth, escaped name, optional value)
// - builder: stack-based fold of classified lines into a Tree
// - tree: the Node/Tree data model
//
// AI-ASSISTANT-INFO: Report parsing entry points

/// Per-line classification and field name coding
pub mod line;

/// Stack-based tree builder
pub mod builder;

/// Tree data model
pub mod tree;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use builder::{TreeBuilder, build, parse_reader, parse_str};
pub use line::{ClassifiedLine, DEPTH_MARKER, classify, decode_field_name, escape_field_name};
pub use tree::{Descendants, Node, ROOT_NAME, Tree};
