// Language resources: the English stopword list and the word tokenizer.
//
// The stopword list is cached as a plain text file in a platform-appropriate
// directory (~/.local/share/resume-sorter/resources/ on Linux). On first use
// it is looked up there; when missing it is materialized from the English
// list bundled with the `stop-words` crate and written back to the cache.
//
// Nothing in this module fails outward. A missing capability selects a
// weaker strategy, and the choice is visible through `ResourceState` and
// `TokenizerStrategy`.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Serialize;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::matcher::taxonomy;

/// File name of the cached stopword list, one word per line.
const STOPWORDS_FILE: &str = "stopwords-english.txt";

/// Runs of characters that are neither whitespace nor punctuation, or a
/// single punctuation mark. Punctuation ends up in its own token so
/// "python," and "Python’s" still yield "python". regex-lite has no Unicode
/// classes, so the typographic marks common in PDF text are listed by hand.
const WORD_PATTERN: &str =
    r"[^\s!-/:-@\[-`{-~’‘“”«»„–—•…·]+|[!-/:-@\[-`{-~’‘“”«»„–—•…·]";

/// How text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerStrategy {
    /// Regex tokenizer that separates punctuation from words
    WordBoundary,
    /// Degraded fallback: split on whitespace only
    Whitespace,
}

impl TokenizerStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerStrategy::WordBoundary => "word-boundary",
            TokenizerStrategy::Whitespace => "whitespace",
        }
    }
}

/// Lifecycle of the process-wide language resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    /// Nothing has asked for resources yet
    Uninitialized,
    /// Word tokenizer and stopword list are both in use
    Available,
    /// At least one capability is missing and a fallback is in effect
    Degraded,
}

/// Snapshot of the resource setup, for `resume-sorter status`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceStatus {
    pub data_dir: PathBuf,
    pub stopword_cache_present: bool,
    pub state: ResourceState,
    pub strategy: TokenizerStrategy,
    pub stopword_count: usize,
}

/// Tokenizer capability plus the stopword set.
///
/// Built once per process by [`global`], or directly via
/// [`LanguageResources::initialize`] when a caller needs its own settings.
#[derive(Debug)]
pub struct LanguageResources {
    word_pattern: Option<Regex>,
    stopwords: Option<HashSet<String>>,
}

impl LanguageResources {
    /// Resolve both capabilities for the given config. Never fails.
    pub fn initialize(config: &Config) -> Self {
        let word_pattern = match config.tokenizer {
            TokenizerStrategy::WordBoundary => match Regex::new(WORD_PATTERN) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(error = %e, "Word tokenizer unavailable, falling back to whitespace");
                    None
                }
            },
            TokenizerStrategy::Whitespace => {
                info!("Whitespace tokenization selected by config");
                None
            }
        };

        let stopwords = if config.stopwords_enabled {
            load_stopwords(&config.data_dir)
        } else {
            info!("Stopword filtering disabled by config");
            None
        };

        let resources = Self {
            word_pattern,
            stopwords,
        };
        debug!(
            state = ?resources.state(),
            strategy = resources.strategy().as_str(),
            stopwords = resources.stopwords.as_ref().map_or(0, HashSet::len),
            "Language resources initialized"
        );
        resources
    }

    /// Resources with no stopwords and the whitespace tokenizer.
    pub fn degraded() -> Self {
        Self {
            word_pattern: None,
            stopwords: None,
        }
    }

    pub fn strategy(&self) -> TokenizerStrategy {
        if self.word_pattern.is_some() {
            TokenizerStrategy::WordBoundary
        } else {
            TokenizerStrategy::Whitespace
        }
    }

    pub fn state(&self) -> ResourceState {
        if self.word_pattern.is_some() && self.stopwords.is_some() {
            ResourceState::Available
        } else {
            ResourceState::Degraded
        }
    }

    pub fn word_pattern(&self) -> Option<&Regex> {
        self.word_pattern.as_ref()
    }

    pub fn stopwords(&self) -> Option<&HashSet<String>> {
        self.stopwords.as_ref()
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords
            .as_ref()
            .is_some_and(|words| words.contains(token))
    }

    /// `stopword_cache_present` is taken from the caller because initializing
    /// creates the cache; check it before calling `initialize`.
    pub fn status(&self, config: &Config, stopword_cache_present: bool) -> ResourceStatus {
        ResourceStatus {
            data_dir: config.data_dir.clone(),
            stopword_cache_present,
            state: self.state(),
            strategy: self.strategy(),
            stopword_count: self.stopwords.as_ref().map_or(0, HashSet::len),
        }
    }
}

static RESOURCES: OnceLock<LanguageResources> = OnceLock::new();

/// Process-wide resources, initialized on first call from the environment.
///
/// An invalid environment config is logged and replaced by the defaults.
pub fn global() -> &'static LanguageResources {
    RESOURCES.get_or_init(|| {
        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Invalid resource configuration, using defaults");
            Config::default()
        });
        LanguageResources::initialize(&config)
    })
}

/// State of the process-wide resources without forcing initialization.
pub fn global_state() -> ResourceState {
    RESOURCES
        .get()
        .map_or(ResourceState::Uninitialized, LanguageResources::state)
}

/// Returns the default directory for cached language resources.
/// Uses the platform data directory: ~/.local/share/resume-sorter/resources/ on Linux.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resume-sorter")
        .join("resources")
}

pub fn stopword_cache_path(dir: &Path) -> PathBuf {
    dir.join(STOPWORDS_FILE)
}

pub fn stopword_cache_present(dir: &Path) -> bool {
    stopword_cache_path(dir).exists()
}

/// Write the bundled stopword list into the cache unless it's already there.
///
/// Unlike the lazy path this reports failures, so `init-resources` can tell
/// the user why the cache couldn't be created.
pub fn ensure_resources(dir: &Path) -> Result<PathBuf> {
    let path = stopword_cache_path(dir);
    if path.exists() {
        info!(path = %path.display(), "Stopword cache already exists, skipping");
        return Ok(path);
    }

    let words = bundled_stopwords();
    if words.is_empty() {
        anyhow::bail!("No bundled English stopword list available");
    }
    write_stopword_cache(dir, &words)?;
    Ok(path)
}

/// Lookup, then fetch, then give up. Returns None when no usable list exists.
fn load_stopwords(dir: &Path) -> Option<HashSet<String>> {
    let words = match read_stopword_cache(dir) {
        Ok(Some(words)) => {
            debug!(count = words.len(), "Loaded cached stopwords");
            words
        }
        Ok(None) => fetch_stopwords(dir),
        Err(e) => {
            warn!(error = %e, "Stopword cache unreadable, refetching");
            fetch_stopwords(dir)
        }
    };

    // Taxonomy terms must stay matchable whatever list is in use.
    let set: HashSet<String> = words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty() && !taxonomy::is_keyword_term(w))
        .collect();

    if set.is_empty() {
        warn!("No stopwords available, stopword filtering disabled");
        None
    } else {
        Some(set)
    }
}

/// Ok(None) means the cache is absent or empty.
fn read_stopword_cache(dir: &Path) -> Result<Option<Vec<String>>> {
    let path = stopword_cache_path(dir);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(if words.is_empty() { None } else { Some(words) })
}

fn fetch_stopwords(dir: &Path) -> Vec<String> {
    let words = bundled_stopwords();
    if words.is_empty() {
        return words;
    }
    if let Err(e) = write_stopword_cache(dir, &words) {
        warn!(error = %e, "Could not cache stopwords, continuing with bundled list");
    }
    words
}

fn bundled_stopwords() -> Vec<String> {
    get(LANGUAGE::English)
}

fn write_stopword_cache(dir: &Path, words: &[String]) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create resource directory: {}", dir.display()))?;

    let path = stopword_cache_path(dir);
    let mut contents = words.join("\n");
    contents.push('\n');
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), count = words.len(), "Cached English stopwords");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir_is_under_resume_sorter() {
        let dir = default_data_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("resume-sorter") && path_str.contains("resources"),
            "Expected path containing resume-sorter/resources, got: {path_str}"
        );
    }

    #[test]
    fn test_word_pattern_compiles() {
        assert!(Regex::new(WORD_PATTERN).is_ok());
    }

    #[test]
    fn test_initialize_fetches_and_caches_stopwords() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!stopword_cache_present(dir.path()));

        let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));

        assert!(stopword_cache_present(dir.path()));
        assert_eq!(resources.state(), ResourceState::Available);
        assert_eq!(resources.strategy(), TokenizerStrategy::WordBoundary);
        assert!(resources.is_stopword("the"));
        assert!(resources.is_stopword("and"));
    }

    #[test]
    fn test_cached_list_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(stopword_cache_path(dir.path()), "alpha\nBeta\n\n").unwrap();

        let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));
        let words = resources.stopwords().unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.contains("alpha"));
        assert!(words.contains("beta"));
    }

    #[test]
    fn test_empty_cache_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(stopword_cache_path(dir.path()), "\n").unwrap();

        let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));
        assert!(resources.is_stopword("the"));
    }

    #[test]
    fn test_keyword_terms_are_never_stopwords() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(stopword_cache_path(dir.path()), "the\ncontent\nlead\n").unwrap();

        let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));

        assert!(resources.is_stopword("the"));
        assert!(!resources.is_stopword("content"));
        assert!(!resources.is_stopword("lead"));
    }

    #[test]
    fn test_cache_of_only_keyword_terms_disables_filtering() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(stopword_cache_path(dir.path()), "python\nlaw\n").unwrap();

        let resources = LanguageResources::initialize(&Config::with_data_dir(dir.path()));
        assert!(resources.stopwords().is_none());
        assert_eq!(resources.state(), ResourceState::Degraded);
    }

    #[test]
    fn test_whitespace_config_is_degraded() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            tokenizer: TokenizerStrategy::Whitespace,
            ..Config::with_data_dir(dir.path())
        };

        let resources = LanguageResources::initialize(&config);
        assert_eq!(resources.strategy(), TokenizerStrategy::Whitespace);
        assert_eq!(resources.state(), ResourceState::Degraded);
    }

    #[test]
    fn test_stopwords_off_skips_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            stopwords_enabled: false,
            ..Config::with_data_dir(dir.path())
        };

        let resources = LanguageResources::initialize(&config);
        assert!(resources.stopwords().is_none());
        assert!(!stopword_cache_present(dir.path()));
    }

    #[test]
    fn test_unwritable_cache_dir_still_filters() {
        // A regular file where the directory should be makes create_dir_all fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let resources = LanguageResources::initialize(&Config::with_data_dir(&blocker));
        assert!(resources.is_stopword("the"));
    }

    #[test]
    fn test_ensure_resources_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_resources(dir.path()).unwrap();
        std::fs::write(&first, "custom\n").unwrap();

        let second = ensure_resources(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "custom\n");
    }

    #[test]
    fn test_status_reports_cache_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path());
        let cache_present = stopword_cache_present(dir.path());
        let resources = LanguageResources::initialize(&config);

        let status = resources.status(&config, cache_present);
        assert!(!status.stopword_cache_present);
        assert!(stopword_cache_present(dir.path()));
        assert_eq!(status.state, ResourceState::Available);
        assert!(status.stopword_count > 0);

        let status = resources.status(&config, stopword_cache_present(dir.path()));
        assert!(status.stopword_cache_present);
    }

    #[test]
    fn test_word_pattern_splits_typographic_punctuation() {
        let re = Regex::new(WORD_PATTERN).unwrap();
        let tokens: Vec<&str> = re
            .find_iter("python’s “sql” – figma•")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(
            tokens,
            vec!["python", "’", "s", "“", "sql", "”", "–", "figma", "•"]
        );
    }
}
