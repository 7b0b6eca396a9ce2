use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{ValwatchError, ValwatchResult};
use crate::services::report_generator::ReportGenerator;
use crate::structs::validation_batch::ValidationBatch;
use crate::structs::validation_file::ValidationFile;

pub struct ReportExporter;

impl ReportExporter {

    pub fn default_filename(batch_id: i64) -> String {
        format!("validation_report_{}.md", batch_id)
    }

    // The single file-writing function in the core; everything upstream of
    // it is pure and testable without touching the filesystem.
    pub fn save(content: &str, path: &Path) -> ValwatchResult<()> {
        fs::write(path, content).map_err(|e| {
            ValwatchError::file_error(&path.display().to_string(), "write report", &e.to_string())
        })
    }

    pub fn export(
        batch: &ValidationBatch,
        files: Option<&[ValidationFile]>,
        output: Option<&Path>,
    ) -> ValwatchResult<PathBuf> {
        let markdown = ReportGenerator::generate(batch, files);
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(Self::default_filename(batch.id)));

        Self::save(&markdown, &path)?;
        Ok(path)
    }
}
