// Comment classifier trait: the seam between callers and the scorer.
//
// The batch pipeline and the CLI hold a `&dyn CommentClassifier`, so the
// heuristic filter can be swapped without touching them.

use super::filter::{ContentFilter, FilterResult};
use crate::models::Submission;

/// Anything that can decide whether a comment needs moderation.
pub trait CommentClassifier: Send + Sync {
    /// Classify a single comment.
    fn classify(&self, content: &str, author_name: &str) -> FilterResult;

    /// Classify several submissions, returning results in the same order.
    fn classify_batch(&self, submissions: &[Submission]) -> Vec<FilterResult> {
        submissions
            .iter()
            .map(|s| self.classify(&s.content, &s.author_name))
            .collect()
    }
}

impl CommentClassifier for ContentFilter {
    fn classify(&self, content: &str, author_name: &str) -> FilterResult {
        self.filter(content, author_name)
    }
}
