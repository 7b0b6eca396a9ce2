use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptInfo {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sha256: Option<String>,
}

impl PromptInfo {
    pub fn key(&self) -> String {
        format!("{}::{}", self.category, self.name)
    }
}
