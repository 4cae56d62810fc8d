// ============================================================================
// mkvtree-core/src/report/line.rs
// ============================================================================
//
// LINE CLASSIFIER: Depth and Field Extraction for Single Report Lines
//
// Every structural entry in an mkvinfo text report is prefixed with the depth
// marker "+ ". The character offset of that marker is the entry's nesting
// depth; the text after it is a "Name: value" pair or a bare name.
//
// KEY COMPONENTS:
// - ClassifiedLine: depth, escaped field name and optional value of one line
// - classify: pure line -> Option<ClassifiedLine> function
// - escape_field_name / decode_field_name: the field name coding scheme
//
// AI-ASSISTANT-INFO: Per-line classification for the report parser

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- External crate imports ----
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Marker whose first occurrence on a line defines that line's depth.
pub const DEPTH_MARKER: &str = "+ ";

/// Characters that are escaped in field names. Everything except ASCII
/// alphanumerics and `_ . -` is encoded; spaces are handled separately and
/// become `+`.
const FIELD_NAME_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b' ');

// ============================================================================
// CLASSIFIED LINE
// ============================================================================

/// A report line that carries a depth marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Zero-based character offset of the depth marker.
    pub depth: usize,
    /// Escaped field name (see [`escape_field_name`]).
    pub name: String,
    /// Text after the first colon, trimmed. `None` when the line has no colon.
    pub value: Option<String>,
}

/// Classifies one line of report text.
///
/// Returns `None` when the line contains no depth marker. Otherwise the depth is
/// the character (not byte) offset of the first marker, so box-drawing prefixes
/// emitted by some mkvinfo builds count as one column each.
///
/// # Examples
///
/// ```rust
/// use mkvtree_core::report::classify;
///
/// let line = classify("|  + Track type: video").unwrap();
/// assert_eq!(line.depth, 3);
/// assert_eq!(line.name, "Track+type");
/// assert_eq!(line.value.as_deref(), Some("video"));
///
/// assert!(classify("No marker here").is_none());
/// ```
pub fn classify(line: &str) -> Option<ClassifiedLine> {
    let start = line.find(DEPTH_MARKER)?;
    let depth = line[..start].chars().count();
    let rest = &line[start + DEPTH_MARKER.len()..];

    let (name, value) = match rest.split_once(':') {
        Some((name, value)) => (name.trim(), Some(value.trim().to_string())),
        None => (rest.trim(), None),
    };

    Some(ClassifiedLine {
        depth,
        name: escape_field_name(name),
        value,
    })
}

// ============================================================================
// FIELD NAME CODING
// ============================================================================

/// Escapes a raw field name so it can serve as a structural identifier.
///
/// Spaces become `+`, a literal `+` becomes `%2B`, and every other character
/// outside `[A-Za-z0-9_.-]` is percent-encoded as UTF-8 bytes.
pub fn escape_field_name(raw: &str) -> String {
    utf8_percent_encode(raw, FIELD_NAME_ESCAPES)
        .to_string()
        .replace(' ', "+")
}

/// Reverses [`escape_field_name`].
///
/// The core never calls this itself; it exists for consumers that need the
/// original field text back.
pub fn decode_field_name(escaped: &str) -> CoreResult<String> {
    let spaced = escaped.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|name| name.into_owned())
        .map_err(|e| CoreError::InvalidFieldName(format!("{}: {}", escaped, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_name_and_value() {
        let line = classify("+ Track type: video").unwrap();
        assert_eq!(line.depth, 0);
        assert_eq!(line.name, "Track+type");
        assert_eq!(line.value.as_deref(), Some("video"));
    }

    #[test]
    fn test_classify_name_only() {
        let line = classify("+ Lacing flags").unwrap();
        assert_eq!(line.name, "Lacing+flags");
        assert_eq!(line.value, None);
    }

    #[test]
    fn test_classify_skips_unmarked_lines() {
        assert!(classify("").is_none());
        assert!(classify("plain text").is_none());
        // A plus without a following space is not a marker
        assert!(classify("a+b").is_none());
    }

    #[test]
    fn test_classify_depth_is_marker_offset() {
        assert_eq!(classify("|+ Segment tracks").unwrap().depth, 1);
        assert_eq!(classify("| + A track").unwrap().depth, 2);
        assert_eq!(classify("    + Codec ID: V_MPEG4/ISO/AVC").unwrap().depth, 4);
    }

    #[test]
    fn test_classify_depth_counts_characters() {
        // "│" is three bytes but one column
        let line = classify("│ + A track").unwrap();
        assert_eq!(line.depth, 2);
    }

    #[test]
    fn test_classify_splits_on_first_colon_only() {
        let line = classify("+ Date: Thu Jan 01 00:00:00 2009 UTC").unwrap();
        assert_eq!(line.name, "Date");
        assert_eq!(line.value.as_deref(), Some("Thu Jan 01 00:00:00 2009 UTC"));
    }

    #[test]
    fn test_classify_empty_remainder() {
        let line = classify("  +    ").unwrap();
        assert_eq!(line.depth, 2);
        assert_eq!(line.name, "");
        assert_eq!(line.value, None);

        let line = classify("+ : orphan").unwrap();
        assert_eq!(line.name, "");
        assert_eq!(line.value.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_classify_value_is_not_escaped() {
        let line = classify("+ Name: Director's cut + extras").unwrap();
        assert_eq!(line.value.as_deref(), Some("Director's cut + extras"));
    }

    #[test]
    fn test_escape_field_name() {
        assert_eq!(escape_field_name("A track"), "A+track");
        assert_eq!(escape_field_name("Default duration"), "Default+duration");
        assert_eq!(escape_field_name("C+D"), "C%2BD");
        assert_eq!(escape_field_name("EBML head, size 35"), "EBML+head%2C+size+35");
        assert_eq!(escape_field_name("a/b_c.d-e"), "a%2Fb_c.d-e");
        assert_eq!(escape_field_name("é"), "%C3%A9");
    }

    #[test]
    fn test_decode_field_name() {
        for raw in ["A track", "C+D", "Segment, size 1234", "é ü", ""] {
            assert_eq!(decode_field_name(&escape_field_name(raw)).unwrap(), raw);
        }
    }

    #[test]
    fn test_decode_field_name_rejects_invalid_utf8() {
        let err = decode_field_name("%FF%FE").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFieldName(_)));
    }
}
