// mkvtree-core/tests/report_parsing_tests.rs
//
// Integration tests for the line classifier and tree builder against
// realistic mkvinfo output.

use mkvtree_core::report::{classify, decode_field_name};
use mkvtree_core::{CoreError, Node, TreeBuilder, build, get_video_fps, parse_reader, parse_str};
use std::io::Write;

const FULL_REPORT: &str = include_str!("fixtures/full_report.txt");

fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::name).collect()
}

#[test]
fn test_depth_fidelity_along_a_chain() {
    // Markers at strictly increasing offsets nest one under the other
    let lines = ["+ l0", "  + l2", "     + l5", "          + l10"];
    let tree = build(lines).unwrap();

    let mut node = tree.root();
    for expected in ["l0", "l2", "l5", "l10"] {
        assert_eq!(node.children().len(), 1);
        node = &node.children()[0];
        assert_eq!(node.name(), expected);
    }
    assert!(node.children().is_empty());
}

#[test]
fn test_sibling_reparenting() {
    let tree = build(["+ parent", "    + first", "    + second"]).unwrap();

    assert_eq!(names(tree.top_level()), ["parent"]);
    let parent = &tree.top_level()[0];
    assert_eq!(names(parent.children()), ["first", "second"]);
    assert!(parent.children().iter().all(|c| c.children().is_empty()));
}

#[test]
fn test_name_value_split() {
    let typed = classify("+ Track type: video").unwrap();
    assert_eq!(typed.depth, 0);
    assert_eq!(typed.name, "Track+type");
    assert_eq!(typed.value.as_deref(), Some("video"));

    let flag = classify("+ Lacing flags").unwrap();
    assert_eq!(flag.name, "Lacing+flags");
    assert_eq!(flag.value, None);
}

#[test]
fn test_full_report_structure() {
    let tree = parse_str(FULL_REPORT).unwrap();

    assert_eq!(
        names(tree.top_level()),
        ["EBML+head", "Segment%2C+size+4380582105"]
    );

    let ebml = &tree.top_level()[0];
    assert_eq!(ebml.children().len(), 4);
    assert_eq!(ebml.child_value("Doc+type"), Some("matroska"));

    let segment = &tree.top_level()[1];
    assert_eq!(
        names(segment.children()),
        [
            "Seek+head+%28subentries+will+be+skipped%29",
            "EbmlVoid+%28size",
            "Segment+information",
            "Segment+tracks",
            "EbmlVoid+%28size",
            "Cluster",
        ]
    );

    let info = segment.child("Segment+information").unwrap();
    assert_eq!(
        info.child_value("Muxing+application"),
        Some("libebml v0.7.7 + libmatroska v0.8.1")
    );
    // Only the first colon splits name from value
    assert_eq!(info.child_value("Duration"), Some("5285.040s (01:28:05.040)"));

    let tracks = segment.child("Segment+tracks").unwrap();
    assert_eq!(names(tracks.children()), ["A+track", "A+track"]);

    let video = &tracks.children()[0];
    assert_eq!(video.child_value("Track+type"), Some("video"));
    let dims = video.child("Video+track").unwrap();
    assert_eq!(dims.child_value("Pixel+width"), Some("1920"));
    assert_eq!(dims.child_value("Pixel+height"), Some("800"));
}

#[test]
fn test_escaped_names_decode_to_report_text() {
    let tree = parse_str(FULL_REPORT).unwrap();
    let segment = &tree.top_level()[1];
    assert_eq!(
        decode_field_name(segment.name()).unwrap(),
        "Segment, size 4380582105"
    );
}

#[test]
fn test_incremental_builder_matches_batch_build() {
    let mut builder = TreeBuilder::new();
    for line in FULL_REPORT.lines() {
        builder.push_line(line).unwrap();
    }
    assert_eq!(builder.finish(), parse_str(FULL_REPORT).unwrap());
}

#[test]
fn test_parse_reader_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_REPORT.as_bytes()).unwrap();

    let reader = std::io::BufReader::new(std::fs::File::open(file.path()).unwrap());
    let tree = parse_reader(reader).unwrap();
    assert_eq!(tree, parse_str(FULL_REPORT).unwrap());
}

#[test]
fn test_parse_reader_tolerates_non_utf8_bytes() {
    // Latin-1 track name, as printed by mkvinfo under a non-UTF-8 locale
    let bytes: &[u8] = b"+ A track\n + Name: Caf\xe9\n + Track type: video\n + Default duration: 41.708ms (23.976 fps for a video track)\n";
    let tree = parse_reader(bytes).unwrap();

    let track = &tree.top_level()[0];
    assert_eq!(track.child_value("Name"), Some("Caf\u{FFFD}"));
    assert_eq!(get_video_fps(&tree).unwrap(), "23.976");
}

#[test]
fn test_malformed_report_fails_fast() {
    let err = parse_str("+ a\n    + b\n  + c\n").unwrap_err();
    match err {
        CoreError::Structure { line, depth, ref name } => {
            assert_eq!(line, 3);
            assert_eq!(depth, 2);
            assert_eq!(name, "c");
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_tree_json_dump() {
    let tree = parse_str("+ A track\n + Track type: video\n + Lacing flag\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&tree.to_json(true).unwrap()).unwrap();

    assert_eq!(value["name"], "root");
    let track = &value["children"][0];
    assert_eq!(track["name"], "A+track");
    assert!(track.get("value").is_none());
    assert_eq!(track["children"][0]["value"], "video");
    assert!(track["children"][1].get("children").is_none());
}
