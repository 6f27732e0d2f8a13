use chainlink::forms::{SubmissionRecord, SubmissionSink};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Most recent submissions kept by [`InMemorySubmissionLog`].
pub(crate) const SUBMISSION_LOG_CAPACITY: usize = 1_000;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps the latest delivered submissions in memory; the site has no backend to forward them
/// to. The oldest record is dropped once the log is full.
#[derive(Clone)]
pub(crate) struct InMemorySubmissionLog {
    records: Arc<Mutex<VecDeque<SubmissionRecord>>>,
    capacity: usize,
}

impl Default for InMemorySubmissionLog {
    fn default() -> Self {
        Self::with_capacity(SUBMISSION_LOG_CAPACITY)
    }
}

impl SubmissionSink for InMemorySubmissionLog {
    fn deliver(&self, record: SubmissionRecord) {
        let mut guard = self.records.lock().expect("submission log mutex poisoned");
        if guard.len() >= self.capacity {
            guard.pop_front();
        }
        debug!(session = %record.session_id, held = guard.len() + 1, "submission recorded");
        guard.push_back(record);
    }
}

impl InMemorySubmissionLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(64)))),
            capacity: capacity.max(1),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .lock()
            .expect("submission log mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }
}
