// Text signals: the raw measurements the filter and the analysis share.
//
// Each function is a single linear scan over the comment. None of them can
// fail: empty input simply produces zero counts and a 0% ratio.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern must compile"));

static LOWERCASE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{15,}").expect("lowercase-run pattern must compile"));

/// Unicode blocks counted as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F1E0, 0x1F1FF), // regional indicators (flags)
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
];

/// Length in characters (not bytes).
pub fn char_length(content: &str) -> usize {
    content.chars().count()
}

/// Number of ASCII uppercase letters.
pub fn uppercase_count(content: &str) -> usize {
    content.chars().filter(|c| c.is_ascii_uppercase()).count()
}

/// Fraction of all characters that are uppercase letters (0.0-1.0).
/// Returns 0.0 for empty input.
pub fn caps_ratio(content: &str) -> f64 {
    let length = char_length(content);
    if length == 0 {
        return 0.0;
    }
    uppercase_count(content) as f64 / length as f64
}

/// Uppercase share expressed as a percentage (0.0-100.0).
pub fn caps_percentage(content: &str) -> f64 {
    caps_ratio(content) * 100.0
}

/// Occurrences of `!`, `?` and `.`, counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunctuationCounts {
    pub exclamations: usize,
    pub questions: usize,
    pub periods: usize,
}

impl PunctuationCounts {
    pub fn total(&self) -> usize {
        self.exclamations + self.questions + self.periods
    }
}

pub fn punctuation_counts(content: &str) -> PunctuationCounts {
    content
        .chars()
        .fold(PunctuationCounts::default(), |mut counts, c| {
            match c {
                '!' => counts.exclamations += 1,
                '?' => counts.questions += 1,
                '.' => counts.periods += 1,
                _ => {}
            }
            counts
        })
}

/// Number of `http://` or `https://` tokens.
pub fn url_count(content: &str) -> usize {
    URL_PATTERN.find_iter(content).count()
}

/// Whitespace token statistics used by the repetition check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStats {
    pub total: usize,
    pub unique: usize,
}

impl TokenStats {
    /// Distinct tokens over total tokens. Returns 1.0 when there are no tokens.
    pub fn unique_ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.unique as f64 / self.total as f64
    }
}

pub fn token_stats(content: &str) -> TokenStats {
    let mut seen: HashSet<String> = HashSet::new();
    let mut total = 0;
    for token in content.split_whitespace() {
        total += 1;
        seen.insert(token.to_lowercase());
    }
    TokenStats {
        total,
        unique: seen.len(),
    }
}

/// Whether any character repeats `min_run` or more times in a row.
///
/// Line breaks never count toward a run.
pub fn has_repeated_char(content: &str, min_run: usize) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0;
    for c in content.chars() {
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

/// Maximal runs of 15 or more lowercase ASCII letters.
pub fn long_lowercase_runs(content: &str) -> Vec<&str> {
    LOWERCASE_RUN
        .find_iter(content)
        .map(|m| m.as_str())
        .collect()
}

/// Whether a letter run has the shape of a real word: a vowel, a consonant,
/// and 3 to 12 letters.
pub fn looks_like_word(run: &str) -> bool {
    let length = run.chars().count();
    let has_vowel = run.chars().any(is_vowel);
    let has_consonant = run
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !is_vowel(c));
    has_vowel && (3..=12).contains(&length) && has_consonant
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Number of characters falling in the emoji blocks.
pub fn emoji_count(content: &str) -> usize {
    content.chars().filter(|&c| is_emoji(c)).count()
}

fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}
