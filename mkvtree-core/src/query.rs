// ============================================================================
// mkvtree-core/src/query.rs
// ============================================================================
//
// TRACK QUERIES: Read-Only Lookups over a Parsed Report
//
// This module encodes the little domain knowledge needed to answer "what is
// the frame rate of the video/audio track?" from a report tree: the track
// entry name, the track type field, and the shape of the frame rate text
// inside the default duration field.
//
// KEY COMPONENTS:
// - find_tracks / find_track_by_type: locate track entries within a scope
// - get_tracks / get_track_by_type: the same, restricted to top-level entries
// - get_fps: extract the frame rate numeral from a track
// - get_audio_fps / get_video_fps: convenience compositions
// - track_summaries: per-track overview used by the CLI
//
// None of these functions mutate the tree, so repeated calls on the same tree
// return identical results.
//
// AI-ASSISTANT-INFO: Track and frame rate queries over report trees

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::report::{Node, Tree};

// ---- External crate imports ----
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// FIELD NAMES
// ============================================================================

/// Escaped name of a track entry ("A track").
pub const TRACK: &str = "A+track";

/// Escaped name of the track type field ("Track type").
pub const TRACK_TYPE: &str = "Track+type";

/// Escaped name of the track number field ("Track number").
pub const TRACK_NUMBER: &str = "Track+number";

/// Escaped name of the codec field ("Codec ID").
pub const CODEC_ID: &str = "Codec+ID";

/// Escaped name of the default duration field ("Default duration").
pub const DEFAULT_DURATION: &str = "Default+duration";

/// Six characters of digits and dots, directly after "(" and before " fps".
/// Integer rates like "(24 fps" and longer ones like "(119.880 fps" do not match.
static FPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([0-9.]{6}) fps").expect("frame rate pattern is valid")
});

// ============================================================================
// TRACK KIND
// ============================================================================

/// Track types as written in the report's "Track type" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitles,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
            TrackKind::Subtitles => "subtitles",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRACK SCOPE
// ============================================================================

/// Where track entries are searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackScope {
    /// Only the depth-0 entries of the report.
    #[default]
    TopLevel,
    /// Any entry at any depth, e.g. under "Segment tracks" in full mkvinfo
    /// output.
    Anywhere,
}

/// Returns the track entries within `scope`, in report order.
///
/// Fails with [`CoreError::TrackNotFound`] when there are none.
pub fn find_tracks(tree: &Tree, scope: TrackScope) -> CoreResult<Vec<&Node>> {
    let tracks: Vec<&Node> = match scope {
        TrackScope::TopLevel => tree.root().children_named(TRACK).collect(),
        TrackScope::Anywhere => tree.root().descendants().filter(|n| n.name() == TRACK).collect(),
    };
    if tracks.is_empty() {
        log::debug!("No '{}' entries found ({:?})", TRACK, scope);
        return Err(CoreError::TrackNotFound("No tracks found".to_string()));
    }
    Ok(tracks)
}

/// Returns the first track within `scope` whose type field equals `track_type`.
///
/// Tracks without a type field never match.
pub fn find_track_by_type<'a>(
    tree: &'a Tree,
    scope: TrackScope,
    track_type: &str,
) -> CoreResult<&'a Node> {
    let not_found = || CoreError::TrackNotFound(format!("No {} track found", track_type));
    find_tracks(tree, scope)
        .map_err(|_| not_found())?
        .into_iter()
        .find(|track| track.child_value(TRACK_TYPE) == Some(track_type))
        .ok_or_else(not_found)
}

/// Returns every top-level track entry, in report order.
///
/// Fails with [`CoreError::TrackNotFound`] when the report has none.
pub fn get_tracks(tree: &Tree) -> CoreResult<Vec<&Node>> {
    find_tracks(tree, TrackScope::TopLevel)
}

/// Returns the first top-level track whose type field equals `track_type`.
pub fn get_track_by_type<'a>(tree: &'a Tree, track_type: &str) -> CoreResult<&'a Node> {
    find_track_by_type(tree, TrackScope::TopLevel, track_type)
}

/// Extracts the frame rate numeral from a track's default duration field.
///
/// The value is returned as written in the report (e.g. `"23.976"`); numeric
/// interpretation is left to the caller.
pub fn get_fps(track: &Node) -> CoreResult<String> {
    let duration = track.child(DEFAULT_DURATION).ok_or_else(|| {
        CoreError::InvalidTrack("No 'Default duration' element found in this track".to_string())
    })?;

    FPS_PATTERN
        .captures(duration.value().unwrap_or_default())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::InvalidTrack("No FPS data found in this track".to_string()))
}

/// Frame rate of the first audio track.
pub fn get_audio_fps(tree: &Tree) -> CoreResult<String> {
    get_fps(get_track_by_type(tree, TrackKind::Audio.as_str())?)
}

/// Frame rate of the first video track.
pub fn get_video_fps(tree: &Tree) -> CoreResult<String> {
    get_fps(get_track_by_type(tree, TrackKind::Video.as_str())?)
}

impl Tree {
    /// First track of the given kind within `scope`.
    pub fn track(&self, scope: TrackScope, kind: TrackKind) -> CoreResult<&Node> {
        find_track_by_type(self, scope, kind.as_str())
    }

    /// Frame rate of the first track of the given kind within `scope`.
    pub fn fps(&self, scope: TrackScope, kind: TrackKind) -> CoreResult<String> {
        get_fps(self.track(scope, kind)?)
    }
}

// ============================================================================
// TRACK SUMMARIES
// ============================================================================

/// Overview of one track entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSummary {
    pub number: Option<String>,
    pub track_type: Option<String>,
    pub codec_id: Option<String>,
    pub fps: Option<String>,
}

/// Summarizes every track within `scope` in report order.
///
/// Missing fields are reported as `None`; only a report without any track
/// entry is an error.
pub fn track_summaries(tree: &Tree, scope: TrackScope) -> CoreResult<Vec<TrackSummary>> {
    let summaries = find_tracks(tree, scope)?
        .into_iter()
        .map(|track| TrackSummary {
            number: track.child_value(TRACK_NUMBER).map(str::to_string),
            track_type: track.child_value(TRACK_TYPE).map(str::to_string),
            codec_id: track.child_value(CODEC_ID).map(str::to_string),
            fps: get_fps(track).ok(),
        })
        .collect();
    Ok(summaries)
}
