use valwatch_cli::enums::issue_type::IssueType;
use valwatch_cli::enums::severity::Severity;
use valwatch_cli::enums::status::Status;
use valwatch_cli::services::severity_aggregator::SeverityAggregator;
use valwatch_cli::structs::severity_counts::SeverityCounts;

use crate::common::{batch, issue, prompt_result};

#[test]
fn completed_prompt_counts_each_issue() {
    let pr = prompt_result(
        "pipeline_validity",
        "check_all",
        Status::Completed,
        Some(vec![
            issue(Severity::High, IssueType::Security, "a", None),
            issue(Severity::High, IssueType::Quality, "b", None),
            issue(Severity::Low, IssueType::BestPractice, "c", None),
        ]),
    );

    let counts = SeverityAggregator::counts_for_prompt(&pr);
    assert_eq!(counts, SeverityCounts { high: 2, medium: 0, low: 1 });
}

#[test]
fn non_completed_prompt_counts_zero_even_with_stale_result() {
    // Issues on a failed prompt are unknown, not zero; the aggregator must
    // ignore any stale result payload.
    for status in [Status::Waiting, Status::Processing, Status::Failed] {
        let pr = prompt_result(
            "pipeline_validity",
            "check_all",
            status,
            Some(vec![issue(Severity::High, IssueType::Security, "stale", None)]),
        );
        assert!(SeverityAggregator::counts_for_prompt(&pr).is_empty());
    }
}

#[test]
fn batch_counts_are_additive() {
    let b = batch(
        1,
        Status::Completed,
        vec![
            prompt_result(
                "pipeline_validity",
                "check_all",
                Status::Completed,
                Some(vec![
                    issue(Severity::High, IssueType::Security, "a", None),
                    issue(Severity::Medium, IssueType::Quality, "b", None),
                ]),
            ),
            prompt_result(
                "artifacts_validity",
                "check_license",
                Status::Completed,
                Some(vec![issue(Severity::Medium, IssueType::Quality, "c", None)]),
            ),
            prompt_result("artifacts_anonymity", "check_names", Status::Failed, None),
        ],
        2,
    );

    let expected = b
        .prompt_results
        .iter()
        .fold(SeverityCounts::new(), |acc, pr| {
            acc.add(&SeverityAggregator::counts_for_prompt(pr))
        });

    assert_eq!(SeverityAggregator::counts_for_batch(&b), expected);
    assert_eq!(expected, SeverityCounts { high: 1, medium: 2, low: 0 });
}

// Scenario: one completed prompt with a high and a low issue, one failed
// prompt. The failed prompt contributes nothing.
#[test]
fn completed_with_issues_plus_failed_prompt() {
    let b = batch(
        1,
        Status::Completed,
        vec![
            prompt_result(
                "pipeline_validity",
                "check_all",
                Status::Completed,
                Some(vec![
                    issue(Severity::High, IssueType::Security, "a", None),
                    issue(Severity::Low, IssueType::Quality, "b", None),
                ]),
            ),
            prompt_result("artifacts_validity", "check_license", Status::Failed, None),
        ],
        1,
    );

    let counts = SeverityAggregator::counts_for_batch(&b);
    assert_eq!(counts, SeverityCounts { high: 1, medium: 0, low: 1 });
}

#[test]
fn highest_severity_follows_total_order() {
    let mut counts = SeverityCounts::new();
    assert_eq!(counts.highest_severity(), None);

    counts.record(Severity::Low);
    assert_eq!(counts.highest_severity(), Some(Severity::Low));

    counts.record(Severity::Medium);
    assert_eq!(counts.highest_severity(), Some(Severity::Medium));

    counts.record(Severity::High);
    assert_eq!(counts.highest_severity(), Some(Severity::High));
}

#[test]
fn breakdown_renders_short_labels() {
    let counts = SeverityCounts { high: 3, medium: 5, low: 4 };
    assert_eq!(counts.breakdown(), "H:3 M:5 L:4");
    assert_eq!(counts.total(), 12);
}

#[test]
fn prompt_summary_status_flags_are_mutually_exclusive() {
    for status in [Status::Waiting, Status::Processing, Status::Completed, Status::Failed] {
        let pr = prompt_result("pipeline_validity", "check_all", status, None);
        let summary = SeverityAggregator::prompt_summary(&pr);

        let flags = [summary.is_completed, summary.is_failed, summary.is_processing];
        assert_eq!(flags.iter().filter(|set| **set).count(), 1, "status {:?}", status);
    }
}

#[test]
fn batch_summary_reports_dominant_severity_and_completion() {
    let b = batch(
        9,
        Status::Completed,
        vec![
            prompt_result(
                "pipeline_validity",
                "check_all",
                Status::Completed,
                Some(vec![issue(Severity::Medium, IssueType::Quality, "a", None)]),
            ),
            prompt_result("artifacts_validity", "check_license", Status::Failed, None),
        ],
        1,
    );

    let summary = SeverityAggregator::batch_summary(&b);
    assert_eq!(summary.completed_prompts, 1);
    assert_eq!(summary.total_prompts, 2);
    assert_eq!(summary.total_issues, 1);
    assert!(summary.has_issues);
    assert_eq!(summary.highest_severity, Some(Severity::Medium));
}

#[test]
fn matrix_preserves_batch_order() {
    let b = batch(
        3,
        Status::Completed,
        vec![
            prompt_result("b_category", "second", Status::Completed, Some(vec![])),
            prompt_result("a_category", "first", Status::Completed, Some(vec![])),
        ],
        2,
    );

    let matrix = SeverityAggregator::prompt_severity_matrix(&b);
    let keys: Vec<&str> = matrix.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["b_category::second", "a_category::first"]);
}
