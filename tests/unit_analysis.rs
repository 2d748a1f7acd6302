// Unit tests for moderator-facing analysis.
//
// Suggestions have their own thresholds and must stay independent of the
// verdict; metrics are recomputed from the raw text.

use quill::moderation::analysis::{
    CAPS_SUGGESTION, EXCLAMATION_SUGGESTION, LONG_SUGGESTION, SHORT_SUGGESTION,
};
use quill::moderation::{
    analyze_comment, analyze_with, filter_comment, get_moderation_suggestions, ContentFilter,
};

// ============================================================
// get_moderation_suggestions
// ============================================================

#[test]
fn short_comment_gets_tip_even_when_approved() {
    assert!(filter_comment("hi", "Eve").is_approved);
    let suggestions = get_moderation_suggestions("hi");
    assert_eq!(suggestions, vec![SHORT_SUGGESTION.to_string()]);
}

#[test]
fn empty_comment_gets_short_tip() {
    assert_eq!(
        get_moderation_suggestions(""),
        vec![SHORT_SUGGESTION.to_string()]
    );
}

#[test]
fn long_comment_gets_paragraph_tip() {
    let content = "word ".repeat(120);
    assert_eq!(
        get_moderation_suggestions(&content),
        vec![LONG_SUGGESTION.to_string()]
    );
}

#[test]
fn caps_tip_uses_lower_threshold_than_filter() {
    // 10 of 30 characters uppercase: 33%, well under the filter's 60%
    let content = "HELLO THERE friend, how are ye";
    assert!(filter_comment(content, "Ann").is_approved);
    assert!(get_moderation_suggestions(content).contains(&CAPS_SUGGESTION.to_string()));
}

#[test]
fn four_exclamations_get_a_tip() {
    let suggestions = get_moderation_suggestions("What a lovely article!!!!");
    assert_eq!(suggestions, vec![EXCLAMATION_SUGGESTION.to_string()]);
}

#[test]
fn calm_comment_gets_no_tips() {
    assert!(get_moderation_suggestions("Thanks, this was a helpful read.").is_empty());
}

// ============================================================
// analyze_comment
// ============================================================

#[test]
fn analysis_reports_raw_metrics() {
    let analysis = analyze_comment("Hello WORLD!!!! see http://x.io", "Kim");
    let metrics = &analysis.analysis;

    assert_eq!(metrics.length, 31);
    assert!((metrics.caps_percentage - 600.0 / 31.0).abs() < 1e-9);
    assert_eq!(metrics.punctuation_count, 5);
    assert_eq!(metrics.url_count, 1);
    assert_eq!(metrics.emoji_count, 0);

    assert!(analysis.filter_result.is_approved);
    assert_eq!(
        analysis.suggestions,
        vec![EXCLAMATION_SUGGESTION.to_string()]
    );
}

#[test]
fn analysis_verdict_matches_filter() {
    let content = "You are all part of the kkk";
    let analysis = analyze_comment(content, "Carol");
    assert_eq!(analysis.filter_result, filter_comment(content, "Carol"));
}

#[test]
fn analysis_counts_emojis() {
    let analysis = analyze_comment("Great post 🎉🔥😀🚀☀✂🎈🌟😎", "Uma");
    assert_eq!(analysis.analysis.emoji_count, 9);
}

#[test]
fn analyze_with_uses_given_threshold() {
    let lenient = ContentFilter::new(95);
    let analysis = analyze_with(&lenient, "You are all part of the kkk", "Carol");
    assert!(analysis.filter_result.is_approved);
    assert_eq!(analysis.filter_result.confidence, 90);
}

#[test]
fn analysis_json_uses_camel_case() {
    let value = serde_json::to_value(analyze_comment("", "Alice")).unwrap();
    assert_eq!(value["filterResult"]["isApproved"], true);
    assert_eq!(value["analysis"]["capsPercentage"], 0.0);
    assert_eq!(value["analysis"]["punctuationCount"], 0);
    assert!(value["suggestions"].is_array());
}
