use std::sync::Mutex;

/// Counters a host driver keeps while feeding reports through the pipeline.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    smoothed: usize,
    passed_through: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                smoothed: 0,
                passed_through: 0,
            }),
        }
    }

    pub fn record_smoothed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.smoothed += 1;
        }
    }

    pub fn record_passthrough(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.passed_through += 1;
        }
    }

    /// Returns `(smoothed, passed_through)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.smoothed, metrics.passed_through)
        } else {
            (0, 0)
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
    fn counters_track_each_kind_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_smoothed();
        recorder.record_smoothed();
        recorder.record_passthrough();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
