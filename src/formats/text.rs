//! Human-readable listing of extracted doc-comments.
//!
//! Each record is shown under its bracketed path, which is also the section title a
//! documentation host would give it, followed by either a one-line preview or the full
//! content indented beneath it. A record with an empty path gets no title.

use crate::doc_comment::DocComment;
use crate::error::Result;
use crate::formats::Format;
use crate::input::FileReport;

const INDENT: &str = "    ";

/// Plain text listing grouped by file.
pub struct TextFormat {
    /// Characters of content shown in preview mode.
    pub preview_width: usize,
    /// Show the whole content instead of a preview.
    pub full: bool,
}

impl TextFormat {
    fn render_doc_comment(&self, doc_comment: &DocComment, out: &mut Vec<String>) {
        if let Some(title) = doc_comment.bracketed_path() {
            out.push(format!("  {title}"));
        }
        out.push(format!("{INDENT}Line: {}", doc_comment.start_line));
        out.push(format!("{INDENT}Path: {}", doc_comment.dotted_path()));

        if self.full {
            out.push(format!("{INDENT}Content:"));
            out.extend(
                doc_comment
                    .content_lines()
                    .map(|l| format!("{INDENT}{INDENT}{l}").trim_end().to_string()),
            );
        } else {
            let total = doc_comment.content.chars().count();
            let flat = doc_comment.content_lines().collect::<Vec<_>>().join(" ");
            let preview: String = flat.chars().take(self.preview_width).collect();
            if total > self.preview_width {
                out.push(format!("{INDENT}Content preview: {preview}..."));
                out.push(format!("{INDENT}(Total length: {total} chars)"));
            } else {
                out.push(format!("{INDENT}Content preview: {preview}"));
            }
        }
    }
}

impl Format for TextFormat {
    fn render(&self, reports: &[FileReport]) -> Result<String> {
        let mut out = Vec::new();
        let mut count = 0;

        for report in reports {
            out.push(report.file.display().to_string());
            if report.doc_comments.is_empty() {
                out.push("  No doc-comments found".to_string());
            }
            for doc_comment in &report.doc_comments {
                self.render_doc_comment(doc_comment, &mut out);
            }
            out.push(String::new());
            count += report.doc_comments.len();
        }

        out.push(format!(
            "Found {count} doc-comment(s) in {} file(s).",
            reports.len()
        ));
        Ok(out.join("\n"))
    }
}

#[cfg(test)]
#[path = "../tests/text.rs"]
mod tests;
