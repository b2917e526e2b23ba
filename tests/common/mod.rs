// Shared test setup: language resources rooted in a scratch directory.
//
// Tests go through `classify_with` with these resources instead of the
// process-wide ones, so neither the developer's environment nor their
// data directory affects the results.

#![allow(dead_code)]

use std::sync::OnceLock;

use tempfile::TempDir;

use resume_sorter::config::Config;
use resume_sorter::matcher::scoring::{classify_with, Classification};
use resume_sorter::text::resources::LanguageResources;

struct Scratch {
    _dir: TempDir,
    resources: LanguageResources,
}

static SCRATCH: OnceLock<Scratch> = OnceLock::new();

/// Word-boundary tokenizer with the bundled stopwords, cached in a tempdir.
pub fn resources() -> &'static LanguageResources {
    &SCRATCH
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("create scratch dir");
            let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));
            Scratch {
                _dir: dir,
                resources,
            }
        })
        .resources
}

pub fn classify(text: &str) -> Classification {
    classify_with(text, resources())
}

pub fn extract_skills(text: &str) -> Vec<String> {
    classify(text).skills
}

pub fn detect_job_field(text: &str) -> String {
    classify(text).field
}
