use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::status::Status;
use crate::structs::prompt_info::PromptInfo;
use crate::structs::validation_file_id::ValidationFileId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveBatch {
    pub id: i64,
    pub name: String,
    pub status: Status,
    pub file_ids: Vec<ValidationFileId>,
    pub selected_prompts: Vec<PromptInfo>,
    pub completed_prompts: u32,
    pub created_at: DateTime<Utc>,
}
