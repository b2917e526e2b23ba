// Tokenization: lowercase, split into words, keep alphabetic non-stopwords.

use serde::Serialize;

use super::resources::{self, LanguageResources, TokenizerStrategy};

/// Tokens for one piece of text, plus how they were produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub strategy: TokenizerStrategy,
    pub stopwords_applied: bool,
}

/// Tokenize with the process-wide resources.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, resources::global()).tokens
}

/// Tokenize with explicit resources.
///
/// Tokens keep their order and duplicates. A token survives only if every
/// character is alphabetic and it isn't a stopword.
pub fn tokenize_with(text: &str, resources: &LanguageResources) -> Tokenized {
    let lowered = text.to_lowercase();

    let raw: Vec<&str> = match resources.word_pattern() {
        Some(re) => re.find_iter(&lowered).map(|m| m.as_str()).collect(),
        None => lowered.split_whitespace().collect(),
    };

    let tokens = raw
        .into_iter()
        .filter(|t| is_alphabetic_token(t) && !resources.is_stopword(t))
        .map(str::to_string)
        .collect();

    Tokenized {
        tokens,
        strategy: resources.strategy(),
        stopwords_applied: resources.stopwords().is_some(),
    }
}

fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
