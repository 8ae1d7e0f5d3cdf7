//! tomldoc: doc-comment extraction for TOML configuration files.
//!
//! A doc-comment is a block of `#:` lines placed directly above a table header or key
//! assignment. The extractor binds each valid block to the item below it and reports the
//! item's dotted path alongside the comment text, so that other tools can embed the
//! documentation of a config file without parsing TOML themselves.
//!
//! ```toml
//! [project]
//!
//! #: The project name, as published.
//! name = "tomldoc"
//! ```
//!
//! yields one [`DocComment`] with the path `project.name`.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod doc_comment;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod input;
pub mod line;

pub use doc_comment::DocComment;
pub use error::{Error, Result};
pub use extractor::{extract_file, extract_str, Extractor};
