use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::structs::severity_counts::SeverityCounts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub severity_counts: SeverityCounts,
    pub total_issues: usize,
    pub completed_prompts: usize,
    pub total_prompts: u32,
    pub has_issues: bool,
    pub highest_severity: Option<Severity>,
}
