// Output formatting: terminal display and JSON reports.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

use crate::matcher::scoring::Classification;

/// One classified document, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: &'a str,
    pub text_chars: usize,
    #[serde(flatten)]
    pub classification: &'a Classification,
}

/// Serialize reports as a pretty-printed JSON array.
pub fn to_json(reports: &[Report<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters rather than bytes, so multi-byte text never splits
/// mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Replace every run of whitespace (including newlines) with one space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
