// Quill: heuristic comment moderation for blog platforms
//
// This is the library root. The moderation engine is the core; the other
// modules wrap it for batch replay and terminal use.

pub mod config;
pub mod models;
pub mod moderation;
pub mod output;
pub mod pipeline;
