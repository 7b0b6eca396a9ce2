use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationFileId {
    pub id: i64,
    pub file_name: String,
}
