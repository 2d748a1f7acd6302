// Colored terminal output for verdicts, analyses and batch summaries.
//
// main.rs delegates all human-readable formatting here.

use colored::Colorize;

use crate::models::{CommentStatus, ModerationRecord};
use crate::moderation::{CommentAnalysis, FilterResult};
use crate::pipeline::batch::BatchOutcome;

/// Display a single verdict.
pub fn display_verdict(result: &FilterResult) {
    let status = CommentStatus::from(result);
    println!(
        "\n{}",
        format!("=== Verdict: {} ===", colorize_status(status)).bold()
    );
    println!("  Confidence: {}/100", result.confidence);

    if let Some(reason) = &result.reason {
        println!("  Reason: {}", reason);
    }
    if let Some(words) = &result.flagged_words {
        println!("  Flagged: {}", words.join(", ").yellow());
    }
}

/// Display a verdict together with metrics and suggestions.
pub fn display_analysis(analysis: &CommentAnalysis) {
    display_verdict(&analysis.filter_result);

    let metrics = &analysis.analysis;
    println!("\n  Metrics:");
    println!(
        "    Length: {}  Caps: {:.1}%  Punctuation: {}  URLs: {}  Emojis: {}",
        metrics.length,
        metrics.caps_percentage,
        metrics.punctuation_count,
        metrics.url_count,
        metrics.emoji_count,
    );

    display_suggestions(&analysis.suggestions);
}

/// Display advisory suggestions.
pub fn display_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("\n  {}", "No suggestions.".dimmed());
        return;
    }
    println!("\n  Suggestions:");
    for suggestion in suggestions {
        println!("    {} {}", "~".yellow(), suggestion);
    }
}

/// Display the summary of a batch run, listing every held comment.
pub fn display_batch_summary(outcome: &BatchOutcome) {
    println!(
        "\n{}",
        format!("=== Batch Moderation ({} comments) ===", outcome.records.len()).bold()
    );
    println!("  {} approved", outcome.approved().to_string().green());
    println!("  {} pending", outcome.pending().to_string().yellow());
    if outcome.skipped > 0 {
        println!("  {} skipped (malformed)", outcome.skipped.to_string().red());
    }

    let held: Vec<&ModerationRecord> = outcome
        .records
        .iter()
        .filter(|r| r.status == CommentStatus::Pending)
        .collect();

    if held.is_empty() {
        return;
    }

    println!();
    println!(
        "  {:>5}  {:<20} {:>4}  {}",
        "Line".dimmed(),
        "Author".dimmed(),
        "Conf".dimmed(),
        "Comment".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for record in held {
        let preview = super::truncate_chars(&record.content, 45);
        println!(
            "  {:>5}  {:<20} {:>4}  {}",
            record.line,
            super::truncate_chars(&record.author_name, 17),
            record.result.confidence,
            preview.dimmed(),
        );
        if let Some(words) = &record.result.flagged_words {
            println!("  {:>5}  {}", "", words.join(", ").yellow());
        }
    }
    println!();
}

fn colorize_status(status: CommentStatus) -> colored::ColoredString {
    match status {
        CommentStatus::Approved => status.as_str().green(),
        CommentStatus::Pending => status.as_str().yellow().bold(),
    }
}
