use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::enums::api_error::ApiError;
use crate::enums::status::Status;
use crate::helpers::backoff;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::progress::Progress;
use crate::structs::validation_batch::ValidationBatch;
use crate::traits::batch_source::BatchSource;

// Per-batch-id polling state. The generation counter invalidates in-flight
// fetches on reset; applied_seq keeps a slow response from overwriting a
// fresher snapshot.
#[derive(Debug, Default)]
struct BatchState {
    snapshot: Option<ValidationBatch>,
    attempt: u32,
    generation: u64,
    applied_seq: u64,
    next_seq: u64,
    last_error: Option<ApiError>,
    completion_notified: bool,
}

#[derive(Debug)]
pub enum PollOutcome {
    Updated {
        batch: ValidationBatch,
        terminal: bool,
        first_terminal: bool,
    },
    Failed {
        error: ApiError,
    },
    Discarded,
}

pub struct BatchPoller<S: BatchSource> {
    source: Arc<S>,
    polling: PollingConfig,
    states: Arc<Mutex<HashMap<i64, BatchState>>>,
}

impl<S: BatchSource> Clone for BatchPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            polling: self.polling.clone(),
            states: Arc::clone(&self.states),
        }
    }
}

impl<S: BatchSource> BatchPoller<S> {

    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, PollingConfig::default())
    }

    pub fn with_config(source: Arc<S>, polling: PollingConfig) -> Self {
        Self {
            source,
            polling,
            states: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // Fetch the batch once and fold the response into the cached state.
    // Never panics across the scheduling boundary: transport and schema
    // failures come back as PollOutcome::Failed values.
    pub async fn poll_once(&self, batch_id: i64) -> PollOutcome {
        let (generation, seq) = {
            let mut states = self.lock_states();
            let state = states.entry(batch_id).or_default();
            state.next_seq += 1;
            (state.generation, state.next_seq)
        };

        let result = self.source.fetch_batch(batch_id).await;

        let mut states = self.lock_states();
        let state = match states.get_mut(&batch_id) {
            Some(state) if state.generation == generation => state,
            _ => return PollOutcome::Discarded,
        };

        match result {
            Ok(batch) => {
                if seq <= state.applied_seq {
                    return PollOutcome::Discarded;
                }
                state.applied_seq = seq;
                state.last_error = None;

                let terminal = batch.status.is_terminal();
                let first_terminal = terminal && !state.completion_notified;
                if terminal {
                    state.attempt = 0;
                    state.completion_notified = true;
                } else {
                    state.attempt += 1;
                }
                state.snapshot = Some(batch.clone());

                PollOutcome::Updated {
                    batch,
                    terminal,
                    first_terminal,
                }
            }
            Err(error) => {
                // The counter still advances on failure so delay growth stays
                // bounded by the same schedule.
                state.attempt += 1;
                state.last_error = Some(error.clone());
                PollOutcome::Failed { error }
            }
        }
    }

    // Poll until the batch reaches a terminal state or reset is called.
    // A None batch id leaves the poller inactive: no request is issued.
    // on_update receives the freshest snapshot (last good one on failure)
    // and the current error, on_complete fires once per terminal transition.
    pub async fn run<F, C>(
        &self,
        batch_id: Option<i64>,
        mut on_update: F,
        mut on_complete: C,
    ) -> Option<ValidationBatch>
    where
        F: FnMut(Option<&ValidationBatch>, Option<&ApiError>),
        C: FnMut(&ValidationBatch),
    {
        let batch_id = batch_id?;

        loop {
            let generation = self.current_generation(batch_id);

            match self.poll_once(batch_id).await {
                PollOutcome::Updated {
                    batch,
                    terminal,
                    first_terminal,
                } => {
                    on_update(Some(&batch), None);
                    if terminal {
                        if first_terminal {
                            on_complete(&batch);
                        }
                        return Some(batch);
                    }
                }
                PollOutcome::Failed { error } => {
                    let snapshot = self.current_batch(batch_id);
                    on_update(snapshot.as_ref(), Some(&error));
                }
                PollOutcome::Discarded => return None,
            }

            // Suspension happens only here, after the fetch has settled, so
            // there is never more than one outstanding fetch per batch id.
            sleep(self.next_delay(batch_id)).await;

            if self.current_generation(batch_id) != generation {
                return None;
            }
        }
    }

    pub fn reset(&self, batch_id: i64) {
        let mut states = self.lock_states();
        let state = states.entry(batch_id).or_default();
        state.generation += 1;
        state.snapshot = None;
        state.attempt = 0;
        state.applied_seq = 0;
        state.next_seq = 0;
        state.last_error = None;
        state.completion_notified = false;
    }

    pub fn current_batch(&self, batch_id: i64) -> Option<ValidationBatch> {
        self.lock_states()
            .get(&batch_id)
            .and_then(|state| state.snapshot.clone())
    }

    pub fn last_error(&self, batch_id: i64) -> Option<ApiError> {
        self.lock_states()
            .get(&batch_id)
            .and_then(|state| state.last_error.clone())
    }

    pub fn attempt(&self, batch_id: i64) -> u32 {
        self.lock_states()
            .get(&batch_id)
            .map_or(0, |state| state.attempt)
    }

    pub fn is_completed(&self, batch_id: i64) -> bool {
        self.snapshot_status(batch_id) == Some(Status::Completed)
    }

    pub fn is_failed(&self, batch_id: i64) -> bool {
        self.snapshot_status(batch_id) == Some(Status::Failed)
    }

    pub fn is_processing(&self, batch_id: i64) -> bool {
        self.snapshot_status(batch_id)
            .is_some_and(|status| status.is_processing())
    }

    pub fn progress(&self, batch_id: i64) -> Option<Progress> {
        let states = self.lock_states();
        let batch = states.get(&batch_id)?.snapshot.as_ref()?;
        Progress::from_counts(batch.completed_prompts, batch.total_prompts)
    }

    pub fn next_delay(&self, batch_id: i64) -> Duration {
        backoff::next_interval_with(
            self.attempt(batch_id),
            self.polling.base_delay_ms,
            self.polling.max_delay_ms,
            self.polling.min_delay_ms,
            self.polling.jitter_ratio,
        )
    }

    // Jitter-free delay estimate for display; None once the batch is terminal.
    pub fn next_delay_hint(&self, batch_id: i64) -> Option<Duration> {
        let states = self.lock_states();
        let state = states.get(&batch_id)?;
        let batch = state.snapshot.as_ref()?;
        if batch.status.is_terminal() {
            return None;
        }
        Some(backoff::nominal_interval(state.attempt.max(1)))
    }

    fn snapshot_status(&self, batch_id: i64) -> Option<Status> {
        self.lock_states()
            .get(&batch_id)
            .and_then(|state| state.snapshot.as_ref().map(|batch| batch.status))
    }

    fn current_generation(&self, batch_id: i64) -> u64 {
        self.lock_states()
            .get(&batch_id)
            .map_or(0, |state| state.generation)
    }

    fn lock_states(&self) -> MutexGuard<'_, HashMap<i64, BatchState>> {
        // A poisoned lock only means another thread panicked mid-update;
        // the map itself is still usable.
        self.states.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
