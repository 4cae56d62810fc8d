//! Core library for parsing `mkvinfo` text reports.
//!
//! This crate turns the indentation-delimited report printed by `mkvinfo` into
//! a tree of named nodes and answers questions about it, chiefly the frame rate
//! of the video and audio tracks.
//!
//! ## Usage Example
//!
//! ```rust
//! use mkvtree_core::{get_audio_fps, get_video_fps, parse_str};
//!
//! let report = "\
//! + A track
//!  + Track type: audio
//!  + Default duration: 41.708ms (23.976 fps for a video track)
//! + A track
//!  + Track type: video
//!  + Default duration: 33.367ms (29.970 fps for a video track)
//! ";
//!
//! let tree = parse_str(report).unwrap();
//! assert_eq!(get_audio_fps(&tree).unwrap(), "23.976");
//! assert_eq!(get_video_fps(&tree).unwrap(), "29.970");
//! ```

pub mod error;
pub mod external;
pub mod query;
pub mod report;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::{MkvinfoExecutor, ReportExecutor};
pub use query::{
    TrackKind, TrackScope, TrackSummary, find_track_by_type, find_tracks, get_audio_fps, get_fps,
    get_track_by_type, get_tracks, get_video_fps, track_summaries,
};
pub use report::{Node, Tree, TreeBuilder, build, parse_reader, parse_str};
