// Composition tests: the filter, the classifier seam and the batch pipeline
// chained together.
//
//   JSON lines -> Submission -> CommentClassifier -> ModerationRecord -> file
//
// File-based tests write under the system temp dir and clean up after.

use std::fs;
use std::path::PathBuf;

use quill::models::{CommentStatus, Submission, ANONYMOUS_AUTHOR};
use quill::moderation::{filter_comment, CommentClassifier, ContentFilter};
use quill::pipeline::batch;

const INPUT: &str = r#"{"content": "Great article, thanks for writing it", "authorName": "Alice"}
{"content": "You are all part of the kkk", "author": "Carol"}

not json at all
{"content": "ok"}
"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quill-{}-{name}", std::process::id()))
}

// ============================================================
// Submission parsing
// ============================================================

#[test]
fn parse_skips_blank_and_counts_malformed_lines() {
    let (submissions, skipped) = batch::parse_submissions(INPUT);
    assert_eq!(skipped, 1);

    let lines: Vec<usize> = submissions.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 2, 5]);

    assert_eq!(submissions[1].1.author_name, "Carol");
    assert_eq!(submissions[2].1.author_name, ANONYMOUS_AUTHOR);
}

// ============================================================
// Classifier seam
// ============================================================

#[test]
fn classify_batch_preserves_order_and_matches_filter() {
    let filter = ContentFilter::default();
    let submissions = vec![
        Submission::new("You are all part of the kkk", "Carol"),
        Submission::new("Let's kill time before the movie", "Bob"),
        Submission::new("", "Alice"),
    ];

    let results = filter.classify_batch(&submissions);
    assert_eq!(results.len(), 3);
    for (submission, result) in submissions.iter().zip(&results) {
        assert_eq!(
            *result,
            filter_comment(&submission.content, &submission.author_name)
        );
    }
    assert!(!results[0].is_approved);
    assert!(results[1].is_approved);
}

#[test]
fn status_follows_verdict() {
    let held = filter_comment("You are all part of the kkk", "Carol");
    let published = filter_comment("Let's kill time before the movie", "Bob");
    assert_eq!(CommentStatus::from(&held), CommentStatus::Pending);
    assert_eq!(CommentStatus::from(&published), CommentStatus::Approved);
    assert_eq!(CommentStatus::Pending.to_string(), "pending");
}

// ============================================================
// Batch pipeline end to end
// ============================================================

#[test]
fn batch_run_reports_statuses_and_writes_verdicts() {
    let input_path = temp_path("input.jsonl");
    let output_path = temp_path("out/verdicts.jsonl");
    fs::write(&input_path, INPUT).unwrap();

    let filter = ContentFilter::default();
    let outcome = batch::run(&filter, &input_path).unwrap();

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.approved(), 2);
    assert_eq!(outcome.pending(), 1);
    assert_eq!(outcome.skipped, 1);

    let held = &outcome.records[1];
    assert_eq!(held.line, 2);
    assert_eq!(held.status, CommentStatus::Pending);
    assert_eq!(held.content, "You are all part of the kkk");

    batch::write_records(&outcome.records, &output_path).unwrap();
    let written = fs::read_to_string(&output_path).unwrap();
    let rows: Vec<serde_json::Value> = written
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["status"], "pending");
    assert_eq!(rows[1]["authorName"], "Carol");
    assert_eq!(rows[1]["result"]["flaggedWords"][0], "kkk");
    assert!(rows[0].get("content").is_none());
    assert!(rows[0]["moderatedAt"].is_string());

    let _ = fs::remove_file(&input_path);
    let _ = fs::remove_dir_all(output_path.parent().unwrap());
}

#[test]
fn batch_run_respects_threshold() {
    let input_path = temp_path("lenient.jsonl");
    fs::write(&input_path, INPUT).unwrap();

    let lenient = ContentFilter::new(95);
    let outcome = batch::run(&lenient, &input_path).unwrap();
    assert_eq!(outcome.pending(), 0);
    assert_eq!(outcome.approved(), 3);

    let _ = fs::remove_file(&input_path);
}

#[test]
fn missing_input_is_an_error() {
    let filter = ContentFilter::default();
    let err = batch::run(&filter, &temp_path("does-not-exist.jsonl")).unwrap_err();
    assert!(err.to_string().contains("failed to read submissions"));
}
