// Data models: the types that flow between the filter, the batch pipeline
// and the output layer.
//
// Field names serialize in camelCase to match the JSON the comment
// submission handler already speaks.

use serde::{Deserialize, Serialize};

use crate::moderation::FilterResult;

/// Author name used when a submission doesn't carry one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

fn anonymous() -> String {
    ANONYMOUS_AUTHOR.to_string()
}

/// A freshly submitted comment awaiting a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub content: String,
    #[serde(alias = "author", default = "anonymous")]
    pub author_name: String,
}

impl Submission {
    pub fn new(content: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author_name: author_name.into(),
        }
    }
}

/// The status a comment is stored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Approved,
    Pending,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Approved => "approved",
            CommentStatus::Pending => "pending",
        }
    }
}

impl From<&FilterResult> for CommentStatus {
    fn from(result: &FilterResult) -> Self {
        if result.is_approved {
            CommentStatus::Approved
        } else {
            CommentStatus::Pending
        }
    }
}

impl std::fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One verdict from a batch run, with enough context to trace it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRecord {
    /// 1-based line number in the input file
    pub line: usize,
    pub author_name: String,
    /// Kept for display; not written to verdict files.
    #[serde(skip)]
    pub content: String,
    pub status: CommentStatus,
    pub result: FilterResult,
    /// RFC 3339
    pub moderated_at: String,
}
