use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::status::Status;
use crate::structs::prompt_result::ValidationPromptResult;
use crate::structs::validation_file_id::ValidationFileId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationBatch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    pub file_ids: Vec<ValidationFileId>,
    pub completed_prompts: u32,
    pub total_prompts: u32,
    #[serde(default)]
    pub total_files: u32,
    pub prompt_results: Vec<ValidationPromptResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ValidationBatch {
    // Boundary check applied after deserialization; a payload that violates
    // these counters is treated as malformed, not clamped.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.completed_prompts > self.total_prompts {
            return Err(format!(
                "completed_prompts ({}) exceeds total_prompts ({})",
                self.completed_prompts, self.total_prompts
            ));
        }
        if self.total_prompts as usize != self.prompt_results.len() {
            return Err(format!(
                "total_prompts ({}) does not match prompt_results length ({})",
                self.total_prompts,
                self.prompt_results.len()
            ));
        }
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // A completed batch can still carry individually failed prompt results.
    // That is a valid terminal state; callers decide how loudly to flag it.
    pub fn failed_prompt_count(&self) -> usize {
        self.prompt_results
            .iter()
            .filter(|pr| pr.status == Status::Failed)
            .count()
    }
}
