use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::text::resources::{default_data_dir, TokenizerStrategy};

/// Central configuration loaded from environment variables.
///
/// The binary loads a .env file via dotenvy before calling `load`. The
/// library reads the same variables when it first initializes its language
/// resources, so the CLI and embedders see the same behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the cached stopword list
    pub data_dir: PathBuf,
    /// Preferred tokenizer (default: WordBoundary)
    pub tokenizer: TokenizerStrategy,
    /// Whether stopwords are filtered out of token sets (default: true)
    pub stopwords_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tokenizer: TokenizerStrategy::WordBoundary,
            stopwords_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. Unknown tokenizer or stopword values are
    /// rejected so a typo doesn't silently change classification results.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("RESUME_SORTER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let tokenizer = match env::var("RESUME_SORTER_TOKENIZER").as_deref() {
            Ok("whitespace") => TokenizerStrategy::Whitespace,
            Ok("word") | Err(_) => TokenizerStrategy::WordBoundary,
            Ok(other) => anyhow::bail!(
                "RESUME_SORTER_TOKENIZER must be \"word\" or \"whitespace\", got {other:?}"
            ),
        };

        let stopwords_enabled = match env::var("RESUME_SORTER_STOPWORDS").as_deref() {
            Ok("off") => false,
            Ok("on") | Err(_) => true,
            Ok(other) => anyhow::bail!(
                "RESUME_SORTER_STOPWORDS must be \"on\" or \"off\", got {other:?}"
            ),
        };

        Ok(Self {
            data_dir,
            tokenizer,
            stopwords_enabled,
        })
    }

    /// Config rooted at an explicit data directory, everything else default.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }
}
