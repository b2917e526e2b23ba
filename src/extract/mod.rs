// Document text extraction.

pub mod pdf;
pub mod traits;

pub use pdf::{extract_text_from_pdf, PdfExtractor};
pub use traits::TextExtractor;
