use chrono::{DateTime, Utc};

use crate::intent::IntentClassifier;
use crate::models::{IntentLabel, TermRecord};
use crate::text::char_len;

const SUBSTRING_BONUS: f64 = 50.0;
const PREFIX_BONUS: f64 = 40.0;
const INTENT_MATCH_BONUS: f64 = 30.0;
const SEEN_WITHIN_HOUR_BONUS: f64 = 25.0;
const SEEN_WITHIN_DAY_BONUS: f64 = 10.0;
const LENGTH_SIMILARITY_CEILING: f64 = 20.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours between `seen_at` and `now`. Timestamps ahead of `now` count as zero.
#[must_use]
pub fn elapsed_hours(now: DateTime<Utc>, seen_at: DateTime<Utc>) -> f64 {
    i64_to_f64((now - seen_at).num_milliseconds().max(0)) / MILLIS_PER_HOUR
}

/// Additive text/intent/recency heuristic. Scores are unbounded and never
/// normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer {
    classifier: IntentClassifier,
}

impl RelevanceScorer {
    #[must_use]
    pub const fn new(classifier: IntentClassifier) -> Self {
        Self { classifier }
    }

    #[must_use]
    pub fn score(
        &self,
        term: &TermRecord,
        query: &str,
        intent: IntentLabel,
        now: DateTime<Utc>,
    ) -> f64 {
        let text_lower = term.text.to_lowercase();
        let query_lower = query.to_lowercase();
        let mut score = 0.0;

        if text_lower.contains(&query_lower) {
            score += SUBSTRING_BONUS;
        }
        if text_lower.starts_with(&query_lower) {
            score += PREFIX_BONUS;
        }
        if self.classifier.classify(&term.text) == intent {
            score += INTENT_MATCH_BONUS;
        }

        let hours = elapsed_hours(now, term.last_seen_at);
        if hours < 1.0 {
            score += SEEN_WITHIN_HOUR_BONUS;
        } else if hours < 24.0 {
            score += SEEN_WITHIN_DAY_BONUS;
        }

        score + length_similarity(char_len(&term.text), char_len(query))
    }
}

fn length_similarity(term_len: usize, query_len: usize) -> f64 {
    let diff = usize_to_f64(term_len.abs_diff(query_len));
    (LENGTH_SIMILARITY_CEILING - diff).max(0.0)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "term lengths and elapsed milliseconds stay far below f64 mantissa limits"
)]
const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

#[allow(
    clippy::cast_precision_loss,
    reason = "term lengths and elapsed milliseconds stay far below f64 mantissa limits"
)]
const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
