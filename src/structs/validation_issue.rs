use serde::{Deserialize, Serialize};
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    #[serde(default)]
    pub lines: Option<Vec<u64>>,
}
