use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const POLL_BASE_DELAY_MS: u64 = 1000;
pub const POLL_MAX_DELAY_MS: u64 = 60000;
pub const POLL_MIN_DELAY_MS: u64 = 500;
pub const POLL_JITTER_RATIO: f64 = 0.1;

pub const DEFAULT_LOGS_PAGE: u32 = 1;
pub const DEFAULT_LOGS_PER_PAGE: u32 = 20;

pub const NO_CONTENT_PLACEHOLDER: &str = "(no content)";

pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
