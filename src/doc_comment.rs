//! Documentation records produced by the extractor.
//!
//! A record pairs the text of one doc-comment block with the location of the item it
//! documents. The location is kept as path segments; the dotted and bracketed spellings
//! are derived on demand rather than stored.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One doc-comment block bound to the table or key it documents.
pub struct DocComment {
    /// Segments of the documented item's location, e.g. `["project", "dependencies"]`.
    pub path: Vec<String>,
    /// Block text with markers stripped, one line per marker line.
    pub content: String,
    /// 1-based line number of the first marker line in the source file.
    pub start_line: usize,
}

impl DocComment {
    #[must_use]
    /// Build a record from its parts.
    pub fn new(path: Vec<String>, content: impl Into<String>, start_line: usize) -> Self {
        Self {
            path,
            content: content.into(),
            start_line,
        }
    }

    #[must_use]
    /// Segments joined by `.`, or an empty string for a root-level record.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    #[must_use]
    /// Table notation such as `[project.dependencies]`, used as a section title.
    ///
    /// Returns `None` when the path is empty, since there is nothing to title.
    pub fn bracketed_path(&self) -> Option<String> {
        if self.path.is_empty() {
            None
        } else {
            Some(format!("[{}]", self.dotted_path()))
        }
    }

    #[must_use]
    /// Stable anchor for the record, e.g. `toml-project-dependencies`.
    pub fn anchor_id(&self) -> Option<String> {
        if self.path.is_empty() {
            None
        } else {
            Some(format!("toml-{}", self.path.join("-")))
        }
    }

    /// Content lines in encounter order. Blank payload lines come through as empty strings.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

impl Serialize for DocComment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("DocComment", 5)?;
        record.serialize_field("path", &self.path)?;
        record.serialize_field("dotted_path", &self.dotted_path())?;
        record.serialize_field("bracketed_path", &self.bracketed_path())?;
        record.serialize_field("content", &self.content)?;
        record.serialize_field("start_line", &self.start_line)?;
        record.end()
    }
}

#[cfg(test)]
#[path = "tests/doc_comment.rs"]
mod tests;
