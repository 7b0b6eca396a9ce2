use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("API Error: status {code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("Schema Error: {0}")]
    Schema(String),
}
