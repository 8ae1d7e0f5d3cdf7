//! The doc-comment extractor.
//!
//! A single forward scan over the lines of a file finds `#:` blocks, checks them against
//! two positional rules and binds each survivor to the table header or key below it.
//!
//! - **Separator Rule**: the line before a block's first marker line must be blank, unless
//!   the block opens the file.
//! - **Attachment Rule**: no blank line may sit between a block's last marker line and the
//!   item it documents. Plain comments in that gap are fine.
//!
//! Blocks that break either rule, or that have no item below them, are dropped silently.
//! After a block is bound, scanning resumes on the line after its item.
//!
//! Each line is classified once up front, and the table enclosing each line is recorded in
//! the same pass. The search for a block's item stops at the first blank line, since a
//! blank there detaches the block anyway. Search ranges of successive blocks therefore never
//! overlap and extraction stays linear in the size of the file.

use crate::doc_comment::DocComment;
use crate::error::{Error, Result};
use crate::line::{self, LineKind};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extractor over one file's text, with the line list materialised up front.
pub struct Extractor<'a> {
    lines: Vec<&'a str>,
    kinds: Vec<LineKind<'a>>,
    /// Index of the last table header strictly before each line.
    tables: Vec<Option<usize>>,
}

/// A block that has passed the Separator Rule and had its body collected.
struct Block {
    /// Index of the first line after the body.
    end: usize,
    /// Payload of each marker line.
    body: Vec<String>,
}

/// Where the search for a block's item ended.
enum Target {
    /// Table header or key assignment on this line.
    Item(usize),
    /// A blank line came first.
    Detached(usize),
    /// End of file came first.
    Missing,
}

impl<'a> Extractor<'a> {
    #[must_use]
    /// Split `text` into lines and classify each one.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn new(text: &'a str) -> Self {
        let lines = line::split_lines(text);
        let kinds: Vec<LineKind<'a>> = lines.iter().copied().map(line::classify).collect();

        let mut tables = Vec::with_capacity(kinds.len());
        let mut current = None;
        for (i, kind) in kinds.iter().enumerate() {
            tables.push(current);
            if let LineKind::TableHeader(_) = kind {
                current = Some(i);
            }
        }

        Self {
            lines,
            kinds,
            tables,
        }
    }

    #[must_use]
    /// Scan the whole text and return every valid doc-comment, ordered by start line.
    pub fn extract(&self) -> Vec<DocComment> {
        let mut doc_comments = Vec::new();
        let mut i = 0;

        while i < self.lines.len() {
            if !line::is_block_start(self.lines[i]) {
                i += 1;
                continue;
            }
            match self.extract_block(i) {
                Some((doc_comment, target)) => {
                    doc_comments.push(doc_comment);
                    i = target + 1;
                }
                None => i += 1,
            }
        }

        doc_comments
    }

    /// Try to build a record for the block opening at `start`, returning it with the
    /// index of the item it documents.
    fn extract_block(&self, start: usize) -> Option<(DocComment, usize)> {
        if !self.satisfies_separator_rule(start) {
            debug!(line = start + 1, "doc-comment not preceded by a blank line, skipped");
            return None;
        }

        let block = self.collect_block(start);

        let target = match self.find_target(block.end) {
            Target::Item(target) => target,
            Target::Detached(blank) => {
                debug!(
                    line = start + 1,
                    blank = blank + 1,
                    "doc-comment separated from its item by a blank line, skipped"
                );
                return None;
            }
            Target::Missing => {
                debug!(line = start + 1, "doc-comment has no table or key below it, skipped");
                return None;
            }
        };

        let path = self.resolve_path(target)?;
        let doc_comment = DocComment::new(path, block.body.join("\n"), start + 1);
        Some((doc_comment, target))
    }

    /// The line before `start` must be blank, unless `start` is the first line.
    fn satisfies_separator_rule(&self, start: usize) -> bool {
        start == 0 || self.kinds[start - 1] == LineKind::Blank
    }

    /// Consume consecutive marker lines from `start`. Indented marker lines still count
    /// once a block has begun.
    fn collect_block(&self, start: usize) -> Block {
        let mut body = Vec::new();
        let mut end = start;

        while let Some(LineKind::DocComment(payload)) = self.kinds.get(end) {
            body.push((*payload).to_string());
            end += 1;
        }

        Block { end, body }
    }

    /// First table header or key assignment at or after `from`. Plain comments and other
    /// lines are passed over; a blank line ends the search, as it breaks attachment.
    fn find_target(&self, from: usize) -> Target {
        for (i, kind) in self.kinds.iter().enumerate().skip(from) {
            if kind.is_item() {
                return Target::Item(i);
            }
            if *kind == LineKind::Blank {
                return Target::Detached(i);
            }
        }
        Target::Missing
    }

    /// Path of the item on line `target`. Keys are prefixed with the path of the nearest
    /// table header above them anywhere in the file.
    fn resolve_path(&self, target: usize) -> Option<Vec<String>> {
        match self.kinds[target] {
            LineKind::TableHeader(dotted) => Some(line::split_path(dotted)),
            LineKind::KeyAssignment(key) => {
                let mut path = self.enclosing_table(target);
                path.push(key.to_string());
                Some(path)
            }
            _ => None,
        }
    }

    /// Path of the most recent table header before `index`, or empty at the root.
    fn enclosing_table(&self, index: usize) -> Vec<String> {
        match self.tables[index].map(|header| self.kinds[header]) {
            Some(LineKind::TableHeader(dotted)) => line::split_path(dotted),
            _ => Vec::new(),
        }
    }
}

#[must_use]
/// Extract doc-comments from TOML text already in memory.
pub fn extract_str(text: &str) -> Vec<DocComment> {
    Extractor::new(text).extract()
}

/// Read a TOML file in full and extract its doc-comments.
///
/// # Errors
///
/// Returns [`Error::FileUnreadable`] if the file does not exist, cannot be read, or is not
/// valid UTF-8. Grammar violations inside the file are never errors.
pub fn extract_file(path: &Path) -> Result<Vec<DocComment>> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_str(&text))
}

#[cfg(test)]
#[path = "tests/extractor.rs"]
mod tests;
