//! JSON output for tools that consume the records programmatically.

use crate::error::Result;
use crate::formats::Format;
use crate::input::FileReport;

/// Serialises reports as a JSON array of `{ file, doc_comments }` objects.
pub struct JsonFormat {
    /// Indent the output for reading.
    pub pretty: bool,
}

impl Format for JsonFormat {
    fn render(&self, reports: &[FileReport]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(reports)?
        } else {
            serde_json::to_string(reports)?
        };
        Ok(json)
    }
}

#[cfg(test)]
#[path = "../tests/json.rs"]
mod tests;
