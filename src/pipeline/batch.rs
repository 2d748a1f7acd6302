// Batch moderation pipeline: replay a file of submitted comments.
//
// Input is JSON lines, one `Submission` per line. Each comment is classified
// and turned into a `ModerationRecord` carrying the status it would be stored
// with. Malformed lines are logged and skipped; they never abort the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::models::{CommentStatus, ModerationRecord, Submission};
use crate::moderation::CommentClassifier;

/// Submissions classified per progress-bar tick.
const CHUNK_SIZE: usize = 64;

/// What a batch run produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ModerationRecord>,
    /// Lines that could not be parsed as a submission
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn approved(&self) -> usize {
        self.count(CommentStatus::Approved)
    }

    pub fn pending(&self) -> usize {
        self.count(CommentStatus::Pending)
    }

    fn count(&self, status: CommentStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

/// Parse JSON-lines text into submissions, keeping 1-based line numbers.
///
/// Blank lines are ignored. Returns the parsed submissions and the number of
/// lines that failed to parse.
pub fn parse_submissions(input: &str) -> (Vec<(usize, Submission)>, usize) {
    let mut parsed = Vec::new();
    let mut skipped = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Submission>(line) {
            Ok(submission) => parsed.push((line_no, submission)),
            Err(e) => {
                warn!(line = line_no, error = %e, "Malformed submission, skipping");
                skipped += 1;
            }
        }
    }

    (parsed, skipped)
}

/// Classify already-parsed submissions.
pub fn moderate(
    classifier: &dyn CommentClassifier,
    submissions: Vec<(usize, Submission)>,
    progress: &ProgressBar,
) -> Vec<ModerationRecord> {
    let mut records = Vec::with_capacity(submissions.len());

    for chunk in submissions.chunks(CHUNK_SIZE) {
        let batch: Vec<Submission> = chunk.iter().map(|(_, s)| s.clone()).collect();
        let results = classifier.classify_batch(&batch);
        let moderated_at = chrono::Utc::now().to_rfc3339();

        for ((line, submission), result) in chunk.iter().zip(results) {
            records.push(ModerationRecord {
                line: *line,
                author_name: submission.author_name.clone(),
                content: submission.content.clone(),
                status: CommentStatus::from(&result),
                result,
                moderated_at: moderated_at.clone(),
            });
        }
        progress.inc(chunk.len() as u64);
    }

    records
}

/// Run the batch pipeline over a JSON-lines file.
pub fn run(classifier: &dyn CommentClassifier, path: &Path) -> Result<BatchOutcome> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read submissions from {}", path.display()))?;

    let (submissions, skipped) = parse_submissions(&input);
    info!(
        parsed = submissions.len(),
        skipped,
        path = %path.display(),
        "Loaded submissions"
    );

    let pb = ProgressBar::new(submissions.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("  Moderating [{bar:30}] {pos}/{len}")?);

    let records = moderate(classifier, submissions, &pb);
    pb.finish_and_clear();

    let outcome = BatchOutcome { records, skipped };
    info!(
        approved = outcome.approved(),
        pending = outcome.pending(),
        skipped = outcome.skipped,
        "Batch moderation complete"
    );

    Ok(outcome)
}

/// Write records as JSON lines, creating parent directories as needed.
pub fn write_records(records: &[ModerationRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }

    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
