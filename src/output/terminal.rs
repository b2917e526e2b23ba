// Colored terminal output for classifications and resource status.

use colored::Colorize;

use crate::matcher::scoring::Classification;
use crate::matcher::taxonomy::GENERAL_FIELD;
use crate::text::resources::{ResourceState, ResourceStatus, TokenizerStrategy};

/// Display one document's classification with a per-field bar chart.
pub fn display_classification(source: &str, text: &str, result: &Classification) {
    println!("\n{}", format!("=== {source} ===").bold());

    if text.trim().is_empty() {
        println!("  {}", "No text extracted".yellow());
    } else {
        let preview = super::truncate_chars(&super::collapse_whitespace(text), 100);
        println!("  Text: {} chars  {}", text.chars().count(), preview.dimmed());
    }

    let field = if result.field == GENERAL_FIELD {
        result.field.dimmed()
    } else {
        result.field.green().bold()
    };
    println!("  Field: {}  (score {})", field, result.score);

    let max_score = result.scores.iter().map(|s| s.score).max().unwrap_or(0);
    if max_score > 0 {
        println!();
        let bar_width: usize = 20;
        for s in result.scores.iter().filter(|s| s.score > 0) {
            let filled = (s.score as usize * bar_width) / max_score as usize;
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled),
                " ".repeat(bar_width.saturating_sub(filled))
            );
            let bar = if s.score == max_score {
                bar.green()
            } else {
                bar.normal()
            };
            println!("  {:<16} {} {}", s.field, bar, s.score);
        }
    }

    if result.skills.is_empty() {
        println!("\n  Skills: {}", "none detected".dimmed());
    } else {
        println!("\n  Skills: {}", result.skills.join(", "));
    }

    if result.strategy == TokenizerStrategy::Whitespace || !result.stopwords_applied {
        println!(
            "  {} degraded tokenization ({}, stopwords {})",
            "Note:".yellow(),
            result.strategy.as_str(),
            if result.stopwords_applied { "on" } else { "off" }
        );
    }
}

/// Display where language resources live and which strategy is active.
pub fn display_status(status: &ResourceStatus) {
    println!("Resource directory: {}", status.data_dir.display());

    if status.stopword_cache_present {
        println!("Stopword cache: present");
    } else {
        println!("Stopword cache: not yet created");
        println!("  Run `resume-sorter init-resources` to create it");
    }

    let state = match status.state {
        ResourceState::Available => "available".green(),
        ResourceState::Degraded => "degraded".yellow(),
        ResourceState::Uninitialized => "uninitialized".dimmed(),
    };
    println!("Language resources: {state}");
    println!("Tokenizer: {}", status.strategy.as_str());
    println!("Stopwords loaded: {}", status.stopword_count);
}
