// Keyword matching: the static job-field taxonomy and presence scoring.

pub mod scoring;
pub mod taxonomy;
