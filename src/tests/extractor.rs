use super::{extract_file, extract_str, Extractor};
use crate::error::Error;
use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

const EXAMPLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/example.toml"
));

fn paths(text: &str) -> Vec<Vec<String>> {
    extract_str(text).into_iter().map(|dc| dc.path).collect()
}

#[test]
fn test_separator_rule_satisfied() {
    let toml = "[project]\nname = \"test\"\n\n#: This is a valid doc-comment\nversion = \"1.0.0\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project", "version"]);
    assert_eq!(doc_comments[0].content, "This is a valid doc-comment");
    assert_eq!(doc_comments[0].start_line, 4);
}

#[test]
fn test_separator_rule_violated() {
    let toml = "[project]\nname = \"test\"\n#: This doc-comment violates separator rule\nversion = \"1.0.0\"";

    let doc_comments = extract_str(toml);

    assert!(
        doc_comments
            .iter()
            .all(|dc| !dc.path.contains(&"version".to_string())),
        "Should not extract doc-comment violating separator rule, got: {doc_comments:?}"
    );
}

#[test]
fn test_block_at_first_line_needs_no_separator() {
    let doc_comments = extract_str("#: Opening doc\nname = \"x\"");

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["name"]);
    assert_eq!(doc_comments[0].start_line, 1);
}

#[test]
fn test_attachment_rule_satisfied() {
    let toml = "[project]\n\n#: This is a valid doc-comment\nversion = \"1.0.0\"";

    assert_eq!(paths(toml), vec![vec!["project", "version"]]);
}

#[test]
fn test_attachment_rule_violated() {
    let toml = "[project]\n\n#: This doc-comment is separated from item\n\nversion = \"1.0.0\"";

    assert!(extract_str(toml).is_empty(), "Should not extract detached doc-comment");
}

#[test]
fn test_plain_comments_do_not_break_attachment() {
    let toml = "[project]\n\n#: Documented\n# an ordinary comment\n# and another\nversion = \"1.0.0\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project", "version"]);
    assert_eq!(doc_comments[0].content, "Documented");
}

#[test]
fn test_multiline_doc_comments() {
    let toml = "[project]\n\n#: A\n#: B\n#: C\nname = \"test\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].content, "A\nB\nC");
    assert_eq!(doc_comments[0].start_line, 3);
}

#[test]
fn test_marker_spacing_is_preserved_past_first_space() {
    let toml = "\n#:No space\n#: One space\n#:   Three spaces\n#:\nkey = 1";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(
        doc_comments[0].content,
        "No space\nOne space\n  Three spaces\n"
    );
}

#[test]
fn test_table_header_target() {
    let toml = "\n#: Project configuration\n[project]\nname = \"test\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project"]);
    assert_eq!(doc_comments[0].bracketed_path().as_deref(), Some("[project]"));
}

#[test]
fn test_hierarchical_paths() {
    let toml = "\n#: Nested configuration\n[tool.myproject.settings]\n\n#: An option\noption = \"value\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 2);
    assert_eq!(doc_comments[0].path, vec!["tool", "myproject", "settings"]);
    assert_eq!(
        doc_comments[0].bracketed_path().as_deref(),
        Some("[tool.myproject.settings]")
    );
    assert_eq!(
        doc_comments[1].path,
        vec!["tool", "myproject", "settings", "option"]
    );
}

#[test]
fn test_root_level_key() {
    let toml = "\n#: The name\nname = \"test\"\nother = 1";

    assert_eq!(paths(toml), vec![vec!["name"]]);
}

#[test]
fn test_key_uses_nearest_table_above() {
    let toml = "[first]\na = 1\n[second]\nb = 2\n\n#: Documented\nc = 3";

    assert_eq!(paths(toml), vec![vec!["second", "c"]]);
}

#[test]
fn test_only_first_of_consecutive_headers_is_documented() {
    let toml = "\n#: Shared doc\n[alpha]\n[beta]\nx = 1";

    assert_eq!(paths(toml), vec![vec!["alpha"]]);
}

#[test]
fn test_block_without_target_is_dropped() {
    let toml = "[project]\nname = \"x\"\n\n#: Nothing below\n# just comments";

    assert!(extract_str(toml).is_empty());
}

#[test]
fn test_indented_marker_cannot_start_block() {
    let toml = "[project]\n\n  #: Indented\nname = \"x\"";

    assert!(extract_str(toml).is_empty());
}

#[test]
fn test_indented_marker_continues_block() {
    let toml = "\n#: First\n  #: Second\nname = \"x\"";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].content, "First\nSecond");
}

#[test]
fn test_second_block_after_plain_comment_is_dropped() {
    // The second block follows a plain comment, not a blank line.
    let toml = "[t]\n\n#: first\na = 1\n# note\n#: second\nb = 2";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["t", "a"]);
}

#[test]
fn test_resume_past_documented_item() {
    let toml = "\n#: outer\n# plain\n#: inner\nkey = 1\n\n#: next\nnext = 2";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 2);
    assert_eq!(doc_comments[0].path, vec!["key"]);
    assert_eq!(doc_comments[0].content, "outer");
    assert_eq!(doc_comments[1].path, vec!["next"]);
    assert_eq!(doc_comments[1].start_line, 7);
}

#[test]
fn test_unrecognised_lines_are_not_targets() {
    let toml = "\n#: Quoted keys are not recognised\n\"quoted key\" = 1\nplain = 2";

    assert_eq!(paths(toml), vec![vec!["plain"]]);
}

#[test]
fn test_crlf_line_endings() {
    let toml = "[project]\r\n\r\n#: Windows doc\r\nname = \"x\"\r\n";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project", "name"]);
    assert_eq!(doc_comments[0].content, "Windows doc");
}

#[test]
fn test_lone_carriage_return_line_endings() {
    let toml = "[project]\r\r#: Classic Mac doc\rname = \"x\"\r";

    let doc_comments = extract_str(toml);

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project", "name"]);
    assert_eq!(doc_comments[0].start_line, 3);
}

#[test]
fn test_large_inputs_scan_in_linear_time() {
    let dangling = "\n#: x\n".repeat(50_000);
    let root_keys = "\n#: doc\nkey = 1\n".repeat(30_000);
    let started = Instant::now();

    assert!(extract_str(&dangling).is_empty());
    let doc_comments = extract_str(&root_keys);

    assert_eq!(doc_comments.len(), 30_000);
    assert!(doc_comments.iter().all(|dc| dc.path == vec!["key"]));
    assert_eq!(doc_comments[29_999].start_line, 3 * 29_999 + 2);
    assert!(
        started.elapsed() < Duration::from_secs(20),
        "Extraction took {:?}",
        started.elapsed()
    );
}

#[test]
fn test_enclosing_table_tracks_many_headers() {
    let toml: String = (0..1_000)
        .map(|n| format!("[table{n}]\n\n#: doc\nkey{n} = 1\n"))
        .collect();

    let doc_comments = extract_str(&toml);

    assert_eq!(doc_comments.len(), 1_000);
    assert_eq!(doc_comments[999].path, vec!["table999", "key999"]);
}

#[test]
fn test_empty_input() {
    assert!(extract_str("").is_empty());
    assert!(extract_str("\n\n").is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    let extractor = Extractor::new(EXAMPLE);

    assert_eq!(extractor.extract(), extractor.extract());
    assert_eq!(extract_str(EXAMPLE), extract_str(EXAMPLE));
}

#[test]
fn test_example_fixture() {
    let doc_comments = extract_str(EXAMPLE);

    let summary: Vec<(String, usize)> = doc_comments
        .iter()
        .map(|dc| (dc.dotted_path(), dc.start_line))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("title".to_string(), 1),
            ("project".to_string(), 4),
            ("project.version".to_string(), 9),
            ("tool.example.settings".to_string(), 21),
            ("tool.example.settings.retries".to_string(), 24),
        ]
    );

    assert_eq!(doc_comments[1].content, "Project metadata.\nShared by every build.");
    assert_eq!(
        doc_comments[4].content,
        "How many retries to attempt.\n\n  Indented continuation."
    );
}

#[test]
fn test_records_ordered_by_unique_start_line() {
    let doc_comments = extract_str(EXAMPLE);

    assert!(doc_comments
        .windows(2)
        .all(|pair| pair[0].start_line < pair[1].start_line));
    assert!(doc_comments.iter().all(|dc| dc.start_line >= 1));
}

#[test]
fn test_extract_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[project]\n\n#: The project name\nname = \"test-project\"").unwrap();

    let doc_comments = extract_file(file.path()).unwrap();

    assert_eq!(doc_comments.len(), 1);
    assert_eq!(doc_comments[0].path, vec!["project", "name"]);
}

#[test]
fn test_extract_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    match extract_file(&missing) {
        Err(Error::FileUnreadable { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected FileUnreadable, got: {other:?}"),
    }
}

#[test]
fn test_extract_non_utf8_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x23, 0x3a, 0x20, 0xff, 0xfe, 0x0a]).unwrap();

    assert!(matches!(
        extract_file(file.path()),
        Err(Error::FileUnreadable { .. })
    ));
}
