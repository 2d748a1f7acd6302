// Comment moderation: heuristic scoring of freshly submitted comments.
//
// `filter_comment` is the entry point the submission handler calls. The
// analysis helpers recompute the same signals for the moderation queue.

pub mod analysis;
pub mod filter;
pub mod patterns;
pub mod signals;
pub mod traits;

pub use analysis::{
    analyze_comment, analyze_with, get_moderation_suggestions, CommentAnalysis, CommentMetrics,
};
pub use filter::{filter_comment, ContentFilter, FilterResult};
pub use traits::CommentClassifier;
