//! Format trait and implementations for presenting extracted doc-comments.
//!
//! This module defines the `Format` trait which abstracts over the ways a batch of
//! reports is handed to a consumer: a human-readable listing or JSON for other tools.
//! Neither format interprets the content of a doc-comment; it is passed through verbatim.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::input::FileReport;

/// Renders a batch of file reports into a single output string.
pub trait Format {
    /// Produce the output for `reports`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reports cannot be serialised.
    fn render(&self, reports: &[FileReport]) -> Result<String>;
}
