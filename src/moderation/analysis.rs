// Moderator-facing analysis: advisory suggestions plus the raw metrics
// behind a verdict.
//
// Suggestions use their own thresholds and never influence the filter.

use serde::{Deserialize, Serialize};

use super::filter::{ContentFilter, FilterResult};
use super::signals;
use super::traits::CommentClassifier;

const SUGGEST_MIN_LENGTH: usize = 10;
const SUGGEST_MAX_LENGTH: usize = 500;
const SUGGEST_MAX_CAPS_PERCENT: f64 = 30.0;
const SUGGEST_MAX_EXCLAMATIONS: usize = 3;

pub const SHORT_SUGGESTION: &str = "Consider adding more detail to your comment";
pub const LONG_SUGGESTION: &str = "Consider breaking this comment into shorter paragraphs";
pub const CAPS_SUGGESTION: &str = "Consider using less capitalization";
pub const EXCLAMATION_SUGGESTION: &str = "Consider using fewer exclamation marks";

/// Raw metrics shown next to a verdict in the moderation queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentMetrics {
    pub length: usize,
    pub caps_percentage: f64,
    /// `!`, `?` and `.` combined
    pub punctuation_count: usize,
    pub url_count: usize,
    pub emoji_count: usize,
}

impl CommentMetrics {
    pub fn measure(content: &str) -> Self {
        Self {
            length: signals::char_length(content),
            caps_percentage: signals::caps_percentage(content),
            punctuation_count: signals::punctuation_counts(content).total(),
            url_count: signals::url_count(content),
            emoji_count: signals::emoji_count(content),
        }
    }
}

/// Everything a moderator needs to review one comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAnalysis {
    pub filter_result: FilterResult,
    pub suggestions: Vec<String>,
    pub analysis: CommentMetrics,
}

/// Non-blocking tips for improving a comment.
pub fn get_moderation_suggestions(content: &str) -> Vec<String> {
    let length = signals::char_length(content);
    let mut suggestions = Vec::new();

    if length < SUGGEST_MIN_LENGTH {
        suggestions.push(SHORT_SUGGESTION.to_string());
    }
    if length > SUGGEST_MAX_LENGTH {
        suggestions.push(LONG_SUGGESTION.to_string());
    }
    if signals::caps_percentage(content) > SUGGEST_MAX_CAPS_PERCENT {
        suggestions.push(CAPS_SUGGESTION.to_string());
    }
    if signals::punctuation_counts(content).exclamations > SUGGEST_MAX_EXCLAMATIONS {
        suggestions.push(EXCLAMATION_SUGGESTION.to_string());
    }

    suggestions
}

/// Verdict, suggestions and metrics for one comment.
pub fn analyze_comment(content: &str, author_name: &str) -> CommentAnalysis {
    analyze_with(&ContentFilter::default(), content, author_name)
}

/// Same as [`analyze_comment`], with the verdict from a specific classifier.
pub fn analyze_with(
    classifier: &dyn CommentClassifier,
    content: &str,
    author_name: &str,
) -> CommentAnalysis {
    CommentAnalysis {
        filter_result: classifier.classify(content, author_name),
        suggestions: get_moderation_suggestions(content),
        analysis: CommentMetrics::measure(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_of_empty_comment() {
        let metrics = CommentMetrics::measure("");
        assert_eq!(metrics.length, 0);
        assert_eq!(metrics.caps_percentage, 0.0);
        assert_eq!(metrics.punctuation_count, 0);
    }

    #[test]
    fn suggestions_fire_independently() {
        let suggestions = get_moderation_suggestions("WOW!!!!");
        assert_eq!(
            suggestions,
            vec![
                SHORT_SUGGESTION.to_string(),
                CAPS_SUGGESTION.to_string(),
                EXCLAMATION_SUGGESTION.to_string(),
            ]
        );
    }
}
