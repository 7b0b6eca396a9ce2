use valwatch_cli::enums::severity::Severity;
use valwatch_cli::enums::status::Status;
use valwatch_cli::structs::validation_batch::ValidationBatch;

use crate::common::{batch, prompt_result};

fn payload() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "first batch",
        "status": "processing",
        "file_ids": [{"id": 1, "file_name": "workflow.cwl"}],
        "completed_prompts": 1,
        "total_prompts": 2,
        "total_files": 1,
        "prompt_results": [
            {
                "prompt": {"name": "check_all", "category": "pipeline_validity"},
                "status": "completed",
                "result": [
                    {"severity": "high", "type": "security", "description": "x", "lines": [1, 2]}
                ],
                "total_duration_ns": 1_500_000_000u64
            },
            {
                "prompt": {"name": "check_license", "category": "artifacts_validity"},
                "status": "processing"
            }
        ],
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:05:00Z"
    })
}

#[test]
fn conforming_payload_deserializes() {
    let parsed: ValidationBatch = serde_json::from_value(payload()).expect("valid payload");

    assert_eq!(parsed.id, 1);
    assert_eq!(parsed.status, Status::Processing);
    assert_eq!(parsed.prompt_results.len(), 2);
    assert_eq!(parsed.prompt_results[0].status, Status::Completed);
    assert_eq!(parsed.prompt_results[0].total_duration_ns, Some(1_500_000_000));
    assert_eq!(parsed.prompt_results[1].result, None);

    let issues = parsed.prompt_results[0].result.as_ref().expect("issues");
    assert_eq!(issues[0].severity, Severity::High);
    assert_eq!(issues[0].lines, Some(vec![1, 2]));

    assert!(parsed.check_invariants().is_ok());
}

#[test]
fn unknown_status_is_rejected() {
    let mut bad = payload();
    bad["status"] = serde_json::json!("exploded");

    assert!(serde_json::from_value::<ValidationBatch>(bad).is_err());
}

#[test]
fn unknown_severity_is_rejected() {
    let mut bad = payload();
    bad["prompt_results"][0]["result"][0]["severity"] = serde_json::json!("critical");

    assert!(serde_json::from_value::<ValidationBatch>(bad).is_err());
}

#[test]
fn negative_duration_is_rejected() {
    let mut bad = payload();
    bad["prompt_results"][0]["total_duration_ns"] = serde_json::json!(-5);

    assert!(serde_json::from_value::<ValidationBatch>(bad).is_err());
}

#[test]
fn counter_overflow_violates_invariants() {
    let mut b = batch(
        1,
        Status::Processing,
        vec![prompt_result("pipeline_validity", "check_all", Status::Processing, None)],
        0,
    );
    b.completed_prompts = 5;

    assert!(b.check_invariants().is_err());
}

#[test]
fn prompt_count_mismatch_violates_invariants() {
    let mut b = batch(
        1,
        Status::Processing,
        vec![prompt_result("pipeline_validity", "check_all", Status::Processing, None)],
        0,
    );
    b.total_prompts = 3;

    assert!(b.check_invariants().is_err());
}
