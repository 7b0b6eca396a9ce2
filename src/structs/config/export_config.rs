use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub include_files: bool,
}
