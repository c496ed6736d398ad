use crate::domain::ports::MapMetrics;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// In-process counters for map creation outcomes.
#[derive(Debug, Clone, Default)]
pub struct CountingMetrics {
    successes: Arc<AtomicU64>,
    failures: Arc<AtomicU64>,
}

impl CountingMetrics {
    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl MapMetrics for CountingMetrics {
    async fn record_map_creation_success(&self) {
        let total = self.successes.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("Maps created: {}, failed: {}", total, self.failures());
    }

    async fn record_map_creation_failure(&self) {
        let total = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!("Maps created: {}, failed: {}", self.successes(), total);
    }
}
