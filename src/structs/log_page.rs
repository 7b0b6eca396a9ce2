use serde::{Deserialize, Serialize};
use crate::structs::validation_batch::ValidationBatch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPage {
    pub logs: Vec<ValidationBatch>,
    pub curr_page: u32,
    pub total_pages: u32,
    pub per_page: u32,
    pub total: u32,
    pub has_next: bool,
    pub has_prev: bool,
}
