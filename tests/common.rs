use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::oneshot;
use valwatch_cli::enums::api_error::ApiError;
use valwatch_cli::enums::issue_type::IssueType;
use valwatch_cli::enums::severity::Severity;
use valwatch_cli::enums::status::Status;
use valwatch_cli::structs::active_batch::ActiveBatch;
use valwatch_cli::structs::log_page::LogPage;
use valwatch_cli::structs::prompt_info::PromptInfo;
use valwatch_cli::structs::prompt_result::ValidationPromptResult;
use valwatch_cli::structs::validation_batch::ValidationBatch;
use valwatch_cli::structs::validation_file::ValidationFile;
use valwatch_cli::structs::validation_file_id::ValidationFileId;
use valwatch_cli::structs::validation_issue::ValidationIssue;
use valwatch_cli::traits::batch_source::BatchSource;

pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid RFC3339 timestamp")
}

pub fn issue(
    severity: Severity,
    issue_type: IssueType,
    description: &str,
    lines: Option<Vec<u64>>,
) -> ValidationIssue {
    ValidationIssue {
        severity,
        issue_type,
        description: description.to_string(),
        lines,
    }
}

pub fn prompt_result(
    category: &str,
    name: &str,
    status: Status,
    issues: Option<Vec<ValidationIssue>>,
) -> ValidationPromptResult {
    ValidationPromptResult {
        prompt: PromptInfo {
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            sha256: None,
        },
        status,
        error_message: None,
        result: issues,
        total_duration_ns: None,
        eval_duration_ns: None,
        load_duration_ns: None,
        prompt_eval_duration_ns: None,
    }
}

pub fn batch(
    id: i64,
    status: Status,
    prompt_results: Vec<ValidationPromptResult>,
    completed_prompts: u32,
) -> ValidationBatch {
    let total_prompts = prompt_results.len() as u32;
    ValidationBatch {
        id,
        name: format!("batch-{}", id),
        status,
        file_ids: Vec::new(),
        completed_prompts,
        total_prompts,
        total_files: 0,
        prompt_results,
        created_at: ts("2025-06-01T12:00:00Z"),
        updated_at: ts("2025-06-01T12:05:00Z"),
    }
}

pub fn file_ref(id: i64, file_name: &str) -> ValidationFileId {
    ValidationFileId {
        id,
        file_name: file_name.to_string(),
    }
}

pub fn file(id: i64, file_name: &str, content: &str, sha256: Option<&str>) -> ValidationFile {
    ValidationFile {
        id,
        file_name: file_name.to_string(),
        content: content.to_string(),
        file_type: "text".to_string(),
        sha256: sha256.map(|s| s.to_string()),
        created_at: ts("2025-06-01T11:59:00Z"),
    }
}

// Returns one scripted response per fetch, then fails with a transport error.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<ValidationBatch, ApiError>>>,
    fetch_count: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<ValidationBatch, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BatchSource for ScriptedSource {
    async fn fetch_batch(&self, _batch_id: i64) -> Result<ValidationBatch, ApiError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("scripted responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("script exhausted".to_string())))
    }

    async fn fetch_file_contents(&self, _file_ids: &[i64]) -> Result<Vec<ValidationFile>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_logs(
        &self,
        _page: u32,
        _per_page: u32,
        _search: Option<&str>,
    ) -> Result<LogPage, ApiError> {
        Err(ApiError::Network("not scripted".to_string()))
    }

    async fn fetch_active_batches(&self) -> Result<Vec<ActiveBatch>, ApiError> {
        Ok(Vec::new())
    }
}

// Each fetch blocks until the matching oneshot sender releases it, so tests
// control exactly when responses land.
pub struct GatedSource {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<ValidationBatch, ApiError>>>>,
}

impl GatedSource {
    pub fn new(gates: Vec<oneshot::Receiver<Result<ValidationBatch, ApiError>>>) -> Self {
        Self {
            gates: Mutex::new(gates.into()),
        }
    }
}

#[async_trait]
impl BatchSource for GatedSource {
    async fn fetch_batch(&self, _batch_id: i64) -> Result<ValidationBatch, ApiError> {
        let gate = self
            .gates
            .lock()
            .expect("gate lock")
            .pop_front()
            .expect("a gate for every fetch");
        gate.await
            .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string())))
    }

    async fn fetch_file_contents(&self, _file_ids: &[i64]) -> Result<Vec<ValidationFile>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_logs(
        &self,
        _page: u32,
        _per_page: u32,
        _search: Option<&str>,
    ) -> Result<LogPage, ApiError> {
        Err(ApiError::Network("not scripted".to_string()))
    }

    async fn fetch_active_batches(&self) -> Result<Vec<ActiveBatch>, ApiError> {
        Ok(Vec::new())
    }
}
