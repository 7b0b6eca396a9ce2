use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::structs::severity_counts::SeverityCounts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSummary {
    pub severity_counts: SeverityCounts,
    pub total_issues: usize,
    pub has_issues: bool,
    pub highest_severity: Option<Severity>,
    pub is_completed: bool,
    pub is_failed: bool,
    pub is_processing: bool,
}
