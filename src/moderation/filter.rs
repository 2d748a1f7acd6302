// Comment filter: scores a comment and decides approved vs. pending.
//
// Every check adds a fixed weight to a running confidence score when it
// fires. The comment is approved only if the raw score stays below the
// approval threshold. Reported confidence is clamped to 100, but the
// decision uses the unclamped total.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{self, Category, SUSPICIOUS_AUTHOR_TERMS};
use super::signals;

/// Raw scores at or above this are held for moderation.
pub const DEFAULT_APPROVAL_THRESHOLD: u32 = 50;

const MIN_THRESHOLD: u32 = 1;
const MAX_THRESHOLD: u32 = 100;

/// Prefix of every rejection reason.
pub const REASON_PREFIX: &str = "Content flagged for moderation: ";

const CAPS_WEIGHT: u32 = 50;
const PUNCTUATION_WEIGHT: u32 = 40;
const URLS_WEIGHT: u32 = 75;
const REPETITIVE_WEIGHT: u32 = 60;
const TOO_SHORT_WEIGHT: u32 = 30;
const TOO_LONG_WEIGHT: u32 = 20;
const SUSPICIOUS_NAME_WEIGHT: u32 = 40;
const CHAR_REPETITION_WEIGHT: u32 = 50;
const GIBBERISH_WEIGHT: u32 = 70;
const EMOJI_WEIGHT: u32 = 30;

const CAPS_MIN_LENGTH: usize = 15;
const CAPS_MAX_RATIO: f64 = 0.6;
const MAX_EXCLAMATIONS: usize = 5;
const MAX_QUESTIONS: usize = 5;
const MAX_PERIODS: usize = 8;
const MAX_URLS: usize = 2;
const REPETITION_MIN_TOKENS: usize = 15;
const REPETITION_MIN_UNIQUE_RATIO: f64 = 0.4;
const MIN_LENGTH: usize = 5;
const MAX_LENGTH: usize = 2000;
const CHAR_RUN_LIMIT: usize = 5;
const MAX_EMOJIS: usize = 8;

/// The verdict for one comment.
///
/// `reason` and `flagged_words` are only set when the comment is not approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub is_approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_words: Option<Vec<String>>,
    /// 0-100
    pub confidence: u32,
}

/// Running score plus the labels collected while checking.
#[derive(Debug, Default)]
struct Tally {
    score: u32,
    reasons: Vec<&'static str>,
    flagged: Vec<String>,
}

impl Tally {
    fn flag(&mut self, token: impl Into<String>, weight: u32, reason: &'static str) {
        self.flagged.push(token.into());
        self.score = self.score.saturating_add(weight);
        self.reasons.push(reason);
    }
}

/// The heuristic comment filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFilter {
    approval_threshold: u32,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self {
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
        }
    }
}

impl ContentFilter {
    /// Build a filter gating at `approval_threshold`, clamped to 1..=100.
    ///
    /// A threshold of 0 would hold comments that nothing flagged.
    pub fn new(approval_threshold: u32) -> Self {
        Self {
            approval_threshold: approval_threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD),
        }
    }

    pub fn approval_threshold(&self) -> u32 {
        self.approval_threshold
    }

    /// Score a comment and its author's display name.
    pub fn filter(&self, content: &str, author_name: &str) -> FilterResult {
        let mut tally = Tally::default();

        scan_patterns(content, &mut tally);
        check_formatting(content, &mut tally);

        if author_looks_suspicious(author_name) {
            tally.flag("suspicious name", SUSPICIOUS_NAME_WEIGHT, "suspicious author name");
        }

        check_noise(content, &mut tally);

        debug!(score = tally.score, flags = tally.flagged.len(), "Scored comment");

        self.decide(tally)
    }

    fn decide(&self, tally: Tally) -> FilterResult {
        let confidence = tally.score.min(100);

        if tally.score < self.approval_threshold {
            return FilterResult {
                is_approved: true,
                reason: None,
                flagged_words: None,
                confidence,
            };
        }

        let reasons = dedup_in_order(tally.reasons.iter().map(|r| r.to_string()));
        let flagged = dedup_in_order(tally.flagged);

        FilterResult {
            is_approved: false,
            reason: Some(format!("{REASON_PREFIX}{}", reasons.join(", "))),
            flagged_words: Some(flagged),
            confidence,
        }
    }
}

/// Score a comment with the default threshold.
pub fn filter_comment(content: &str, author_name: &str) -> FilterResult {
    ContentFilter::default().filter(content, author_name)
}

/// Whether the author's display name contains an impersonation or bot term.
pub fn author_looks_suspicious(author_name: &str) -> bool {
    let lowered = author_name.to_lowercase();
    SUSPICIOUS_AUTHOR_TERMS
        .iter()
        .any(|term| lowered.contains(term))
}

fn scan_patterns(content: &str, tally: &mut Tally) {
    let lowered = content.to_lowercase();

    for category in Category::ALL {
        for phrase in category.phrases() {
            if !lowered.contains(phrase) {
                continue;
            }
            if patterns::is_exempt(phrase, &lowered) {
                debug!(phrase, "Matched phrase exempted by context");
                continue;
            }
            tally.flag(*phrase, category.weight(), category.label());
        }
    }
}

/// Caps, punctuation, URLs, token repetition and length.
fn check_formatting(content: &str, tally: &mut Tally) {
    let length = signals::char_length(content);

    if length > CAPS_MIN_LENGTH && signals::caps_ratio(content) > CAPS_MAX_RATIO {
        tally.flag("excessive caps", CAPS_WEIGHT, "excessive capitalization");
    }

    let punctuation = signals::punctuation_counts(content);
    if punctuation.exclamations > MAX_EXCLAMATIONS
        || punctuation.questions > MAX_QUESTIONS
        || punctuation.periods > MAX_PERIODS
    {
        tally.flag("excessive punctuation", PUNCTUATION_WEIGHT, "excessive punctuation");
    }

    if signals::url_count(content) > MAX_URLS {
        tally.flag("multiple urls", URLS_WEIGHT, "multiple URLs");
    }

    let tokens = signals::token_stats(content);
    if tokens.total > REPETITION_MIN_TOKENS
        && tokens.unique_ratio() < REPETITION_MIN_UNIQUE_RATIO
    {
        tally.flag("repetitive text", REPETITIVE_WEIGHT, "repetitive content");
    }

    if length < MIN_LENGTH {
        tally.flag("too short", TOO_SHORT_WEIGHT, "comment too short");
    }
    if length > MAX_LENGTH {
        tally.flag("too long", TOO_LONG_WEIGHT, "comment too long");
    }
}

/// Character runs, gibberish and emoji density.
fn check_noise(content: &str, tally: &mut Tally) {
    if signals::has_repeated_char(content, CHAR_RUN_LIMIT) {
        tally.flag(
            "character repetition",
            CHAR_REPETITION_WEIGHT,
            "excessive character repetition",
        );
    }

    // Runs are at least 15 letters and `looks_like_word` caps words at 12,
    // so any run found here counts as gibberish.
    let gibberish = signals::long_lowercase_runs(content)
        .into_iter()
        .any(|run| !signals::looks_like_word(run));
    if gibberish {
        tally.flag("gibberish", GIBBERISH_WEIGHT, "gibberish content");
    }

    if signals::emoji_count(content) > MAX_EMOJIS {
        tally.flag("excessive emojis", EMOJI_WEIGHT, "excessive emojis");
    }
}

fn dedup_in_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_score_above_100_is_clamped_but_rejected() {
        let result = filter_comment("kkk nazi white power", "Carol");
        assert!(!result.is_approved);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn same_phrase_reason_listed_once() {
        let result = filter_comment("nazi propaganda and more kkk talk", "Carol");
        let reason = result.reason.unwrap();
        assert_eq!(reason.matches("hate speech").count(), 1);
    }

    #[test]
    fn custom_threshold_changes_gate_only() {
        let strict = ContentFilter::new(30);
        let result = strict.filter("", "Alice");
        assert!(!result.is_approved);
        assert_eq!(result.confidence, 30);
        assert_eq!(
            result.flagged_words.as_deref(),
            Some(&["too short".to_string()][..])
        );
    }

    #[test]
    fn threshold_is_clamped_into_range() {
        assert_eq!(ContentFilter::new(0).approval_threshold(), 1);
        assert_eq!(ContentFilter::new(250).approval_threshold(), 100);
        assert_eq!(ContentFilter::new(70).approval_threshold(), 70);
    }

    #[test]
    fn zero_threshold_still_approves_clean_comments() {
        let result = ContentFilter::new(0).filter("A perfectly fine comment here", "Alice");
        assert!(result.is_approved);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.reason, None);
        assert_eq!(result.flagged_words, None);
    }

    #[test]
    fn suspicious_author_substring() {
        assert!(author_looks_suspicious("SiteAdmin"));
        assert!(author_looks_suspicious("Abbott"));
        assert!(!author_looks_suspicious("Alice"));
    }
}
