use std::time::Duration;
use rand::Rng;
use crate::config::constants::{
    POLL_BASE_DELAY_MS, POLL_JITTER_RATIO, POLL_MAX_DELAY_MS, POLL_MIN_DELAY_MS,
};

// 1s -> 2s -> 4s ... capped at 60s, ±10% jitter, floored at 500ms.
pub fn next_interval(attempt: u32) -> Duration {
    next_interval_with(
        attempt,
        POLL_BASE_DELAY_MS,
        POLL_MAX_DELAY_MS,
        POLL_MIN_DELAY_MS,
        POLL_JITTER_RATIO,
    )
}

pub fn next_interval_with(
    attempt: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
    min_delay_ms: u64,
    jitter_ratio: f64,
) -> Duration {
    let exponent = attempt.saturating_sub(1).min(63);
    let nominal = base_delay_ms
        .saturating_mul(1u64 << exponent)
        .min(max_delay_ms);

    let jitter_span = nominal as f64 * jitter_ratio;
    let jitter = if jitter_span > 0.0 {
        rand::thread_rng().gen_range(-jitter_span..=jitter_span)
    } else {
        0.0
    };

    let delay_ms = (nominal as f64 + jitter).floor().max(min_delay_ms as f64);
    Duration::from_millis(delay_ms as u64)
}

// Nominal delay without jitter, used for display hints.
pub fn nominal_interval(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(63);
    let nominal = POLL_BASE_DELAY_MS
        .saturating_mul(1u64 << exponent)
        .min(POLL_MAX_DELAY_MS);
    Duration::from_millis(nominal.max(POLL_MIN_DELAY_MS))
}
