// resume-sorter: keyword-based job field classification for PDF resumes.
//
// This is the library root. The pipeline is linear: extract text from a PDF,
// tokenize it, then score the tokens against a fixed job-field taxonomy.

pub mod config;
pub mod extract;
pub mod matcher;
pub mod output;
pub mod text;

pub use extract::extract_text_from_pdf;
pub use matcher::scoring::{
    classify, detect_job_field, extract_skills, field_scores, Classification, FieldScore,
};
