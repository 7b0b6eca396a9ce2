use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationFile {
    pub id: i64,
    pub file_name: String,
    pub content: String,
    pub file_type: String,
    #[serde(default)]
    pub sha256: Option<String>,
    pub created_at: DateTime<Utc>,
}
