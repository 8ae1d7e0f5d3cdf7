//! Document discovery and per-file extraction for a batch of paths.
//!
//! Each file is extracted inside its own failure boundary: an unreadable file is logged and
//! recorded, and the rest of the batch carries on without it.

use crate::doc_comment::DocComment;
use crate::error::Error;
use crate::extractor::extract_file;
use ignore::WalkBuilder;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Serialize)]
/// Doc-comments found in one file.
pub struct FileReport {
    /// File the records were extracted from.
    pub file: PathBuf,
    /// Records in ascending start line order.
    pub doc_comments: Vec<DocComment>,
}

#[derive(Debug, Default)]
/// Outcome of extracting a batch of files.
pub struct Batch {
    /// One report per readable file, in discovery order.
    pub reports: Vec<FileReport>,
    /// Files that could not be read, with the reason.
    pub failures: Vec<Error>,
}

impl Batch {
    #[must_use]
    /// Total number of records across all reports.
    pub fn doc_comment_count(&self) -> usize {
        self.reports.iter().map(|r| r.doc_comments.len()).sum()
    }
}

/// Expand paths into the list of files to scan.
///
/// Files are kept as given regardless of extension. Directories are walked recursively in
/// sorted order, keeping files whose extension is in `extensions`. Hidden entries and
/// anything excluded by `.gitignore` are skipped, and symlinks are not followed.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            walk_dir(&path, extensions, &mut documents)?;
        } else {
            documents.push(path);
        }
    }

    Ok(documents)
}

fn walk_dir(dir: &Path, extensions: &[String], documents: &mut Vec<PathBuf>) -> io::Result<()> {
    let walker = WalkBuilder::new(dir)
        .hidden(true) // Skip hidden files and directories
        .git_ignore(true) // Respect .gitignore files
        .require_git(false) // Even outside a git repository
        .follow_links(false) // Symlinked directories could loop back on themselves
        .sort_by_file_path(Path::cmp)
        .build();

    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && has_extension(entry.path(), extensions) {
            documents.push(entry.into_path());
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

#[must_use]
/// Extract doc-comments from every file, continuing past unreadable ones.
pub fn extract_documents(files: &[PathBuf]) -> Batch {
    let mut batch = Batch::default();

    for file in files {
        match extract_file(file) {
            Ok(doc_comments) => {
                if doc_comments.is_empty() {
                    info!(file = %file.display(), "no doc-comments found");
                } else {
                    debug!(file = %file.display(), count = doc_comments.len(), "extracted doc-comments");
                }
                batch.reports.push(FileReport {
                    file: file.clone(),
                    doc_comments,
                });
            }
            Err(e) => {
                warn!("{e}");
                batch.failures.push(e);
            }
        }
    }

    batch
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
