//! Line classification for the doc-comment grammar.
//!
//! TOML is not parsed here. Each line is matched against a handful of patterns and tagged
//! with the first kind it fits, which is all the extractor needs to find blocks and the
//! items they document.

use regex::Regex;
use std::sync::LazyLock;

/// Marker line: `#:` followed by at most one whitespace character, then the payload.
static DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#:\s?(.*)").expect("valid doc-comment pattern"));

/// Table header: a bracketed dotted path at the start of the line.
static TABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([A-Za-z0-9_.-]+)\]").expect("valid table pattern"));

/// Key assignment: a bare identifier followed by `=`; the value is not inspected.
static KEY_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+)\s*=").expect("valid key pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Structural role of a single line, evaluated on its stripped form.
pub enum LineKind<'a> {
    /// `#:` marker line carrying the payload after the marker.
    DocComment(&'a str),
    /// `[dotted.path]` header carrying the bracket payload.
    TableHeader(&'a str),
    /// `key = ...` assignment carrying the key identifier.
    KeyAssignment(&'a str),
    /// Ordinary `#` comment.
    PlainComment,
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else, such as array items or continuation lines.
    Other,
}

impl LineKind<'_> {
    #[must_use]
    /// Whether the line is a table header or key assignment a block can attach to.
    pub fn is_item(&self) -> bool {
        matches!(self, Self::TableHeader(_) | Self::KeyAssignment(_))
    }
}

#[must_use]
/// Classify a line, first match wins.
///
/// Leading and trailing whitespace is ignored, so an indented `#:` line still counts as a
/// marker line here. Whether a block may *start* on it is decided by [`is_block_start`].
pub fn classify(line: &str) -> LineKind<'_> {
    let stripped = line.trim();
    if stripped.is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = DOC_COMMENT.captures(stripped) {
        return LineKind::DocComment(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = TABLE_HEADER.captures(stripped) {
        return LineKind::TableHeader(caps.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(caps) = KEY_ASSIGNMENT.captures(stripped) {
        return LineKind::KeyAssignment(caps.get(1).map_or("", |m| m.as_str()));
    }
    if stripped.starts_with('#') {
        return LineKind::PlainComment;
    }
    LineKind::Other
}

#[must_use]
/// Whether a block may begin on this raw, un-stripped line: it must open with `#:` in column one.
pub fn is_block_start(raw: &str) -> bool {
    DOC_COMMENT.is_match(raw)
}

#[must_use]
/// Split text into lines on `\n`, `\r\n` or a lone `\r`, without the terminators.
///
/// A trailing terminator does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(pos) = rest.find(['\n', '\r']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..pos]);
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
    }

    lines
}

#[must_use]
/// Split a table header payload into its path segments, verbatim.
pub fn split_path(dotted: &str) -> Vec<String> {
    dotted.split('.').map(str::to_string).collect()
}

#[cfg(test)]
#[path = "tests/line.rs"]
mod tests;
