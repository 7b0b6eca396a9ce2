use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum IssueType {
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "quality")]
    Quality,
    #[serde(rename = "best_practice")]
    BestPractice,
}

impl IssueType {
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Security => "security",
            IssueType::Quality => "quality",
            IssueType::BestPractice => "best_practice",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IssueType::Security => "🔒",
            IssueType::Quality => "⚡",
            IssueType::BestPractice => "📋",
        }
    }
}
