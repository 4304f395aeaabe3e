use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{IntentLabel, RankedSuggestion, TermRecord};

use super::config::RankingConfig;
use super::scoring::{RelevanceScorer, elapsed_hours};

const FRESH_USER_WINDOW_HOURS: f64 = 24.0;
const FREQUENCY_WEIGHT: f64 = 0.5;
const FRESHNESS_HOUR_BONUS: f64 = 30.0;
const FRESHNESS_DAY_BONUS: f64 = 15.0;

/// Primary sort key. User-generated terms seen within the last day form their
/// own tier ahead of everything else, whatever their combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankTier {
    FreshUserGenerated,
    Standard,
}

impl RankTier {
    fn of(term: &TermRecord, hours_since_seen: f64) -> Self {
        if term.is_user_generated && hours_since_seen < FRESH_USER_WINDOW_HOURS {
            Self::FreshUserGenerated
        } else {
            Self::Standard
        }
    }
}

#[derive(Debug)]
struct Scored {
    tier: RankTier,
    suggestion: RankedSuggestion,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    scorer: RelevanceScorer,
    config: RankingConfig,
}

impl SuggestionRanker {
    #[must_use]
    pub const fn new(scorer: RelevanceScorer, config: RankingConfig) -> Self {
        Self { scorer, config }
    }

    /// Scores, orders and caps `candidates`.
    ///
    /// Order: tier, then combined score descending, then term text ascending.
    pub fn rank(
        &self,
        candidates: impl IntoIterator<Item = TermRecord>,
        query: &str,
        intent: IntentLabel,
        now: DateTime<Utc>,
    ) -> Vec<RankedSuggestion> {
        let mut scored = candidates
            .into_iter()
            .map(|term| self.score_candidate(term, query, intent, now))
            .collect::<Vec<_>>();
        scored.sort_by(compare_scored);
        scored.truncate(self.config.max_suggestions);
        scored.into_iter().map(|entry| entry.suggestion).collect()
    }

    fn score_candidate(
        &self,
        term: TermRecord,
        query: &str,
        intent: IntentLabel,
        now: DateTime<Utc>,
    ) -> Scored {
        let relevance = self.scorer.score(&term, query, intent, now);
        let hours = elapsed_hours(now, term.last_seen_at);
        let tier = RankTier::of(&term, hours);
        let combined_score =
            u64_to_f64(term.frequency).mul_add(FREQUENCY_WEIGHT, relevance) + freshness_bonus(hours);
        Scored {
            tier,
            suggestion: RankedSuggestion {
                term,
                relevance,
                combined_score,
                fresh_user_term: tier == RankTier::FreshUserGenerated,
            },
        }
    }
}

fn compare_scored(a: &Scored, b: &Scored) -> Ordering {
    a.tier
        .cmp(&b.tier)
        .then_with(|| {
            b.suggestion
                .combined_score
                .partial_cmp(&a.suggestion.combined_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.suggestion.term.text.cmp(&b.suggestion.term.text))
}

fn freshness_bonus(hours: f64) -> f64 {
    if hours < 1.0 {
        FRESHNESS_HOUR_BONUS
    } else if hours < 24.0 {
        FRESHNESS_DAY_BONUS
    } else {
        0.0
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "usage counters are far below the f64 mantissa limit"
)]
const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}
