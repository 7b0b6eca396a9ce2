use valwatch_cli::helpers::formatters::{
    format_duration_secs, format_issue_count, format_prompt_name, format_token,
};
use valwatch_cli::structs::severity_counts::SeverityCounts;

#[test]
fn snake_case_tokens_become_title_case() {
    assert_eq!(format_token("artifacts_validity"), "Artifacts Validity");
    assert_eq!(format_token("check_all"), "Check All");
    assert_eq!(format_token("single"), "Single");
}

#[test]
fn prompt_name_joins_category_and_name() {
    assert_eq!(
        format_prompt_name("artifacts_validity", "check_all"),
        "Artifacts Validity - Check All"
    );
    assert_eq!(
        format_prompt_name("pipeline_portability", "container_images"),
        "Pipeline Portability - Container Images"
    );
}

#[test]
fn durations_render_in_seconds_with_three_decimals() {
    assert_eq!(format_duration_secs(Some(1_500_000_000)), "1.500");
    assert_eq!(format_duration_secs(Some(42)), "0.000");
    assert_eq!(format_duration_secs(Some(0)), "0.000");
    assert_eq!(format_duration_secs(Some(61_230_000_000)), "61.230");
    assert_eq!(format_duration_secs(None), "N/A");
}

#[test]
fn issue_count_includes_severity_breakdown() {
    let counts = SeverityCounts { high: 3, medium: 5, low: 4 };
    assert_eq!(format_issue_count(&counts), "12 (H:3 M:5 L:4)");

    let empty = SeverityCounts::new();
    assert_eq!(format_issue_count(&empty), "0 (H:0 M:0 L:0)");
}
