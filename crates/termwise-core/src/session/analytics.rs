use crate::models::Analytics;

/// Running totals for a session. The latency average covers every search
/// since the session started; nothing is windowed.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnalyticsTracker {
    snapshot: Analytics,
}

impl AnalyticsTracker {
    pub(crate) fn record_search(&mut self, latency_ms: f64) {
        let previous_count = u64_to_f64(self.snapshot.total_searches);
        self.snapshot.average_latency_ms = self
            .snapshot
            .average_latency_ms
            .mul_add(previous_count, latency_ms)
            / (previous_count + 1.0);
        self.snapshot.total_searches += 1;
    }

    pub(crate) fn record_learned_term(&mut self) {
        self.snapshot.new_terms_learned += 1;
    }

    pub(crate) const fn snapshot(&self) -> Analytics {
        self.snapshot
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "search counters are far below the f64 mantissa limit"
)]
const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_average_over_three_searches() {
        let mut tracker = AnalyticsTracker::default();
        for latency in [10.0, 20.0, 30.0] {
            tracker.record_search(latency);
        }
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.total_searches, 3);
        assert!((snapshot.average_latency_ms - 20.0).abs() < 1e-9);
    }

    #[test]
    fn first_search_sets_average_to_its_latency() {
        let mut tracker = AnalyticsTracker::default();
        tracker.record_search(7.5);
        assert!((tracker.snapshot().average_latency_ms - 7.5).abs() < 1e-9);
    }

    #[test]
    fn average_is_not_windowed() {
        let mut tracker = AnalyticsTracker::default();
        tracker.record_search(100.0);
        for _ in 0..99 {
            tracker.record_search(0.0);
        }
        assert_eq!(tracker.snapshot().total_searches, 100);
        assert!((tracker.snapshot().average_latency_ms - 1.0).abs() < 1e-9);
    }

    #[test]
    fn learned_terms_are_counted_separately() {
        let mut tracker = AnalyticsTracker::default();
        tracker.record_learned_term();
        tracker.record_learned_term();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.new_terms_learned, 2);
        assert_eq!(snapshot.total_searches, 0);
    }
}
