use serde::{Deserialize, Serialize};
use crate::enums::status::Status;
use crate::structs::prompt_info::PromptInfo;
use crate::structs::validation_issue::ValidationIssue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationPromptResult {
    pub prompt: PromptInfo,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<ValidationIssue>>,
    #[serde(default)]
    pub total_duration_ns: Option<u64>,
    #[serde(default)]
    pub eval_duration_ns: Option<u64>,
    #[serde(default)]
    pub load_duration_ns: Option<u64>,
    #[serde(default)]
    pub prompt_eval_duration_ns: Option<u64>,
}
