use std::env;

use anyhow::{Context, Result};

use crate::moderation::filter::DEFAULT_APPROVAL_THRESHOLD;
use crate::output::OutputFormat;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so
/// everything here can also be set there.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Raw scores at or above this hold a comment for moderation (default 50)
    pub approval_threshold: u32,
    /// Default output format (QUILL_OUTPUT: "terminal" or "json")
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
            output: OutputFormat::Terminal,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_vars(
            env::var("QUILL_APPROVAL_THRESHOLD").ok().as_deref(),
            env::var("QUILL_OUTPUT").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values. Unset values fall back to
    /// defaults; invalid ones are errors.
    pub fn from_vars(threshold: Option<&str>, output: Option<&str>) -> Result<Self> {
        let approval_threshold = match threshold.map(str::trim) {
            None | Some("") => DEFAULT_APPROVAL_THRESHOLD,
            Some(raw) => {
                let value: u32 = raw
                    .parse()
                    .with_context(|| format!("QUILL_APPROVAL_THRESHOLD is not a number: {raw}"))?;
                if !(1..=100).contains(&value) {
                    anyhow::bail!(
                        "QUILL_APPROVAL_THRESHOLD must be between 1 and 100, got {value}"
                    );
                }
                value
            }
        };

        let output = match output.map(|s| s.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("terminal") => OutputFormat::Terminal,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                anyhow::bail!("QUILL_OUTPUT must be \"terminal\" or \"json\", got \"{other}\"")
            }
        };

        Ok(Self {
            approval_threshold,
            output,
        })
    }
}
