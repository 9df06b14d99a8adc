use std::sync::Mutex;

/// Per-session counters for the streaming bridge: how many snapshots went
/// out, how many overnight ticks were skipped, and how many sends failed.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Default, Clone, Copy)]
struct Metrics {
    snapshots_sent: usize,
    ticks_skipped: usize,
    send_failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_snapshot(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.snapshots_sent += 1;
        }
    }

    pub fn record_skip(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.ticks_skipped += 1;
        }
    }

    pub fn record_send_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.send_failures += 1;
        }
    }

    /// (snapshots sent, ticks skipped, send failures)
    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (
                metrics.snapshots_sent,
                metrics.ticks_skipped,
                metrics.send_failures,
            )
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let metrics = MetricsRecorder::new();
        metrics.record_snapshot();
        metrics.record_snapshot();
        metrics.record_skip();
        metrics.record_send_failure();
        assert_eq!(metrics.snapshot(), (2, 1, 1));
    }
}
