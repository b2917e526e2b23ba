// PDF text extraction via the `pdf-extract` crate.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::traits::TextExtractor;

/// Extracts text page by page from a PDF file.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        // pdf-extract panics on some malformed documents instead of erroring.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        }))
        .map_err(|_| anyhow::anyhow!("PDF parser panicked on {}", path.display()))?
        .map_err(|e| anyhow::anyhow!("Failed to extract text from {}: {e}", path.display()))?;

        debug!(path = %path.display(), pages = pages.len(), "Extracted PDF text");
        Ok(pages)
    }
}

/// Text of every page joined by newlines, or "" if anything goes wrong.
///
/// Failure is all-or-nothing: one unreadable page discards the document.
pub fn extract_text_from_pdf(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match PdfExtractor.extract(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "PDF extraction failed");
            String::new()
        }
    }
}
