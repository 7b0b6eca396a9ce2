use serde::{Deserialize, Serialize};

// Declaration order mirrors the lifecycle: waiting -> processing -> terminal.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "processing")]
    Processing,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, Status::Waiting | Status::Processing)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Waiting => "waiting",
            Status::Processing => "processing",
            Status::Completed => "completed",
            Status::Failed => "failed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Status::Waiting => "⏳",
            Status::Processing => "🔄",
            Status::Completed => "✅",
            Status::Failed => "❌",
        }
    }
}
