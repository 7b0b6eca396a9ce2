use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::structs::active_batch::ActiveBatch;
use crate::structs::log_page::LogPage;
use crate::structs::validation_batch::ValidationBatch;
use crate::structs::validation_file::ValidationFile;

// Read-only view of the validation backend. Fetches must be idempotent;
// the poller treats every call as side-effect-free.
#[async_trait]
pub trait BatchSource: Send + Sync {

    async fn fetch_batch(&self, batch_id: i64) -> Result<ValidationBatch, ApiError>;

    async fn fetch_file_contents(&self, file_ids: &[i64]) -> Result<Vec<ValidationFile>, ApiError>;

    async fn fetch_logs(&self, page: u32, per_page: u32, search: Option<&str>) -> Result<LogPage, ApiError>;

    async fn fetch_active_batches(&self) -> Result<Vec<ActiveBatch>, ApiError>;
}
