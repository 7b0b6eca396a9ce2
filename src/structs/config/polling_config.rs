use serde::{Deserialize, Serialize};
use crate::config::constants::{
    POLL_BASE_DELAY_MS, POLL_JITTER_RATIO, POLL_MAX_DELAY_MS, POLL_MIN_DELAY_MS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "default_jitter_ratio")]
    pub jitter_ratio: f64,
}

fn default_base_delay_ms() -> u64 {
    POLL_BASE_DELAY_MS
}

fn default_max_delay_ms() -> u64 {
    POLL_MAX_DELAY_MS
}

fn default_min_delay_ms() -> u64 {
    POLL_MIN_DELAY_MS
}

fn default_jitter_ratio() -> f64 {
    POLL_JITTER_RATIO
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            min_delay_ms: default_min_delay_ms(),
            jitter_ratio: default_jitter_ratio(),
        }
    }
}
