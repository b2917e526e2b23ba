// Text extractor trait: the seam between document formats and matching.
//
// Matching only ever sees plain text. Anything that can turn a file into
// per-page strings can sit behind this trait.

use std::path::Path;

use anyhow::Result;

/// Trait for pulling plain text out of a document on disk.
pub trait TextExtractor {
    /// Text of each page, in page order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;

    /// All pages joined by newlines.
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(self.extract_pages(path)?.join("\n"))
    }
}
