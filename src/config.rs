//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We try to find a `tomldoc.toml` in the working directory, and if present we load settings
//! from there. This provides the file extensions to scan, the preview width of the text
//! listing, and whether unreadable files should fail the run.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tomldoc.toml";

const DEFAULT_PREVIEW_WIDTH: usize = 60;

fn default_extensions() -> Vec<String> {
    vec!["toml".to_string()]
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from `tomldoc.toml` or falling back to defaults.
pub struct Config {
    #[facet(default = default_extensions())]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = DEFAULT_PREVIEW_WIDTH)]
    /// Number of content characters shown per record in the text listing.
    pub preview_width: usize,
    #[facet(default = false)]
    /// Exit with a failure status if any requested file could not be read.
    pub fail_on_unreadable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: default_extensions(),
            preview_width: DEFAULT_PREVIEW_WIDTH,
            fail_on_unreadable: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `tomldoc.toml` in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "ignoring malformed config file");
            Self::default()
        })
    }

    #[must_use]
    /// Parse configuration text, filling unset fields with defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
