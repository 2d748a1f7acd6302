// Pattern catalog: the static phrase lists the filter scans for.
//
// Every table here is immutable data. Matching is case-insensitive substring
// search, so a phrase also matches inside longer words ("spam" in "spammer").
// Phrases must be stored lower-cased.

/// A category of objectionable phrases, each with a fixed severity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    HateSpeech,
    Violence,
    Spam,
    AdultContent,
    SuspiciousTerms,
}

impl Category {
    /// All categories in scan order.
    pub const ALL: [Category; 5] = [
        Category::HateSpeech,
        Category::Violence,
        Category::Spam,
        Category::AdultContent,
        Category::SuspiciousTerms,
    ];

    /// Confidence added for each matching phrase in this category.
    pub fn weight(self) -> u32 {
        match self {
            Category::HateSpeech => 90,
            Category::Violence => 85,
            Category::AdultContent => 80,
            Category::Spam => 70,
            Category::SuspiciousTerms => 60,
        }
    }

    /// Reason label reported to moderators.
    pub fn label(self) -> &'static str {
        match self {
            Category::HateSpeech => "hate speech",
            Category::Violence => "violent content",
            Category::Spam => "spam",
            Category::AdultContent => "adult content",
            Category::SuspiciousTerms => "suspicious terms",
        }
    }

    /// The phrases belonging to this category.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Category::HateSpeech => HATE_SPEECH,
            Category::Violence => VIOLENCE,
            Category::Spam => SPAM,
            Category::AdultContent => ADULT_CONTENT,
            Category::SuspiciousTerms => SUSPICIOUS_TERMS,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const HATE_SPEECH: &[&str] = &[
    "kkk",
    "nazi",
    "white power",
    "heil hitler",
    "white supremacy",
    "ethnic cleansing",
    "subhuman",
    "go back to your country",
];

const VIOLENCE: &[&str] = &[
    "kill",
    "murder",
    "beat you up",
    "i will hurt you",
    "you will die",
    "death threat",
    "bomb threat",
];

const SPAM: &[&str] = &[
    "spam",
    "buy now",
    "click here",
    "free money",
    "make money fast",
    "limited time offer",
    "work from home",
    "casino",
    "viagra",
    "crypto giveaway",
    "cheap pills",
];

const ADULT_CONTENT: &[&str] = &[
    "porn",
    "xxx",
    "nude",
    "onlyfans",
    "camgirl",
    "hot singles",
    "sex chat",
    "escort service",
];

const SUSPICIOUS_TERMS: &[&str] = &[
    "official admin",
    "verified account",
    "verify your account",
    "account suspended",
    "password reset",
    "customer support team",
    "send your password",
];

/// Words that contain a catalog phrase but are never counted as violations.
///
/// Compared against the whole word a match sits in, so "skill" clears the
/// "kill" inside it while a bare "kill" still counts.
pub const LEGITIMATE_WORDS: &[&str] = &[
    "skill",
    "skills",
    "skilled",
    "skillful",
    "skillset",
    "overkill",
    "killjoy",
    "xxxl",
];

/// Trigger phrases paired with companions that neutralize them when present
/// anywhere in the same comment.
pub const LEGITIMATE_CONTEXTS: &[(&str, &[&str])] = &[
    (
        "kill",
        &["time", "lights", "boredom", "process", "switch", "bug", "it on stage"],
    ),
    ("murder", &["mystery", "novel", "podcast", "documentary"]),
    ("nude", &["lipstick", "palette", "shade", "colour", "color", "heels"]),
    ("spam", &["filter", "folder", "musubi"]),
];

/// Substrings that make an author display name suspicious.
pub const SUSPICIOUS_AUTHOR_TERMS: &[&str] = &["admin", "moderator", "spam", "bot", "test", "fake"];

/// Whether a matched phrase is exempt given the lower-cased comment.
///
/// A phrase is exempt when every occurrence sits inside an allowlisted word,
/// or when one of its context companions appears anywhere in the comment.
pub fn is_exempt(phrase: &str, lowered_content: &str) -> bool {
    let phrase = phrase.to_lowercase();

    let mut occurrences = lowered_content.match_indices(phrase.as_str()).peekable();
    if occurrences.peek().is_some()
        && occurrences.all(|(start, matched)| {
            let word = enclosing_word(lowered_content, start, start + matched.len());
            LEGITIMATE_WORDS.contains(&word)
        })
    {
        return true;
    }

    LEGITIMATE_CONTEXTS
        .iter()
        .find(|(trigger, _)| *trigger == phrase)
        .is_some_and(|(_, companions)| {
            companions
                .iter()
                .any(|companion| lowered_content.contains(companion))
        })
}

/// The alphanumeric word around `text[start..end]`, widened in both directions.
fn enclosing_word(text: &str, start: usize, end: usize) -> &str {
    let begin = text[..start]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric())
        .last()
        .map_or(start, |(i, _)| i);
    let finish = text[end..]
        .char_indices()
        .find(|(_, c)| !c.is_alphanumeric())
        .map_or(text.len(), |(i, _)| end + i);
    &text[begin..finish]
}
