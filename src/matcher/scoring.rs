// Keyword presence scoring against the job-field taxonomy.
//
// A keyword is present when each of its words is in the token set. Phrases
// only need co-occurrence: "lead ... generation" anywhere in the text counts
// as "lead generation". Each field scores one point per present keyword.

use std::collections::HashSet;

use serde::Serialize;

use super::taxonomy::{Field, GENERAL_FIELD, SKILL_TAXONOMY};
use crate::text::resources::{self, LanguageResources, TokenizerStrategy};
use crate::text::tokenizer::tokenize_with;

/// One field's keyword count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldScore {
    pub field: &'static str,
    pub score: u32,
}

/// Everything the matcher knows about one text, from a single tokenization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Best field, or "General"
    pub field: String,
    /// Score of the best field (0 for "General")
    pub score: u32,
    /// Every taxonomy field in order, including zero scores
    pub scores: Vec<FieldScore>,
    pub skills: Vec<String>,
    pub strategy: TokenizerStrategy,
    pub stopwords_applied: bool,
}

/// Matched keywords in taxonomy order, without duplicates.
pub fn extract_skills(text: &str) -> Vec<String> {
    classify_with(text, resources::global()).skills
}

/// The taxonomy field with the most matched keywords, or "General".
pub fn detect_job_field(text: &str) -> String {
    classify_with(text, resources::global()).field
}

/// Per-field keyword counts, in taxonomy order.
pub fn field_scores(text: &str) -> Vec<FieldScore> {
    classify_with(text, resources::global()).scores
}

pub fn classify(text: &str) -> Classification {
    classify_with(text, resources::global())
}

pub fn classify_with(text: &str, resources: &LanguageResources) -> Classification {
    let tokenized = tokenize_with(text, resources);
    let tokens: HashSet<&str> = tokenized.tokens.iter().map(String::as_str).collect();

    let scores = scores_from_tokens(&tokens);
    let (field, score) = best_field(&scores);

    Classification {
        field: field.to_string(),
        score,
        scores,
        skills: skills_from_tokens(&tokens),
        strategy: tokenized.strategy,
        stopwords_applied: tokenized.stopwords_applied,
    }
}

fn keyword_present(keyword: &str, tokens: &HashSet<&str>) -> bool {
    let mut parts = keyword.split_whitespace().peekable();
    parts.peek().is_some() && parts.all(|part| tokens.contains(part))
}

fn skills_from_tokens(tokens: &HashSet<&str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    SKILL_TAXONOMY
        .iter()
        .flat_map(|field| field.keywords.iter().copied())
        .filter(|kw| keyword_present(kw, tokens))
        .filter(|kw| seen.insert(*kw))
        .map(str::to_string)
        .collect()
}

fn field_score(field: &Field, tokens: &HashSet<&str>) -> u32 {
    field
        .keywords
        .iter()
        .filter(|kw| keyword_present(kw, tokens))
        .count() as u32
}

fn scores_from_tokens(tokens: &HashSet<&str>) -> Vec<FieldScore> {
    SKILL_TAXONOMY
        .iter()
        .map(|field| FieldScore {
            field: field.name,
            score: field_score(field, tokens),
        })
        .collect()
}

/// Only a strictly higher score replaces the current best, so ties go to
/// the earlier field.
fn best_field(scores: &[FieldScore]) -> (&'static str, u32) {
    let mut best = (GENERAL_FIELD, 0);
    for s in scores {
        if s.score > best.1 {
            best = (s.field, s.score);
        }
    }
    best
}
