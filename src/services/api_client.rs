use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::constants::request_timeout;
use crate::enums::api_error::ApiError;
use crate::errors::{ValwatchError, ValwatchResult};
use crate::structs::active_batch::ActiveBatch;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::log_page::LogPage;
use crate::structs::validation_batch::ValidationBatch;
use crate::structs::validation_file::ValidationFile;
use crate::traits::batch_source::BatchSource;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {

    pub fn new(base_url: &str, timeout_secs: u64) -> ValwatchResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout(timeout_secs))
            .build()
            .map_err(|e| ValwatchError::system_error("HTTP client setup", &e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ValwatchResult<Self> {
        Self::new(&config.base_url, config.timeout_secs)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, context: &str) -> Result<T, ApiError> {
        log::debug!("📡 GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                code: status.as_u16(),
                reason,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str::<T>(&body)
            .map_err(|e| ApiError::Schema(format!("{}: {}", context, e)))
    }
}

#[async_trait]
impl BatchSource for ApiClient {

    async fn fetch_batch(&self, batch_id: i64) -> Result<ValidationBatch, ApiError> {
        let url = format!("{}/logs/batches/{}", self.base_url, batch_id);
        let batch: ValidationBatch = self.get_json(url, "validation batch").await?;

        batch.check_invariants().map_err(ApiError::Schema)?;
        Ok(batch)
    }

    async fn fetch_file_contents(&self, file_ids: &[i64]) -> Result<Vec<ValidationFile>, ApiError> {
        let mut files = Vec::with_capacity(file_ids.len());
        for file_id in file_ids {
            let url = format!("{}/files/{}", self.base_url, file_id);
            let file: ValidationFile = self.get_json(url, "file content").await?;
            files.push(file);
        }
        Ok(files)
    }

    async fn fetch_logs(&self, page: u32, per_page: u32, search: Option<&str>) -> Result<LogPage, ApiError> {
        let mut url = format!("{}/logs?page={}&per_page={}", self.base_url, page, per_page);
        if let Some(term) = search {
            url.push_str(&format!("&search={}", term));
        }
        self.get_json(url, "log page").await
    }

    async fn fetch_active_batches(&self) -> Result<Vec<ActiveBatch>, ApiError> {
        let url = format!("{}/validation/active_batches", self.base_url);
        self.get_json(url, "active batches").await
    }
}
