use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::index::TermIndex;
use crate::intent::IntentClassifier;
use crate::models::{
    Analytics, CommitOutcome, RankedSuggestion, RequestLogEntry, SearchOutcome, SeedTerm,
    TermMetadata, UNCATEGORIZED_SEED_CATEGORY, USER_SEARCH_CATEGORY,
};
use crate::ranking::{RelevanceScorer, SuggestionRanker};
use crate::text::{index_key, is_blank, normalize_term, truncate_text};

mod analytics;
mod history;
mod request_log;

const LOGGED_QUERY_MAX_CHARS: usize = 120;

use self::analytics::AnalyticsTracker;
use self::history::RecentSearches;
use self::request_log::{RequestLog, STATUS_NOOP, STATUS_OK, elapsed_ms};

/// One user's autocomplete state: the term index plus everything learned and
/// measured while it is alive.
///
/// All mutation goes through `&mut self`. Each time-dependent operation has an
/// `_at` variant taking the clock reading explicitly.
#[derive(Debug, Clone)]
pub struct SearchSession {
    index: TermIndex,
    classifier: IntentClassifier,
    ranker: SuggestionRanker,
    analytics: AnalyticsTracker,
    recent: RecentSearches,
    request_log: RequestLog,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let classifier = IntentClassifier::new();
        Self {
            index: TermIndex::new(),
            classifier,
            ranker: SuggestionRanker::new(
                RelevanceScorer::new(classifier),
                config.ranking.clone(),
            ),
            analytics: AnalyticsTracker::default(),
            recent: RecentSearches::new(config.session.recent_limit),
            request_log: RequestLog::new(config.session.request_log_capacity),
        }
    }

    #[must_use]
    pub fn with_seed(config: &AppConfig, seeds: impl IntoIterator<Item = SeedTerm>) -> Self {
        let mut session = Self::new(config);
        session.load_seed(seeds);
        session
    }

    pub fn load_seed(&mut self, seeds: impl IntoIterator<Item = SeedTerm>) -> usize {
        self.load_seed_at(seeds, Utc::now())
    }

    /// Bulk-inserts reference terms, forcing them to non-user provenance.
    /// Blank texts are skipped and blank categories become
    /// [`UNCATEGORIZED_SEED_CATEGORY`]. Returns the number of terms inserted.
    pub fn load_seed_at(
        &mut self,
        seeds: impl IntoIterator<Item = SeedTerm>,
        now: DateTime<Utc>,
    ) -> usize {
        let mut loaded = 0usize;
        for seed in seeds {
            if is_blank(&seed.text) {
                debug!(category = %seed.category, "skipping seed term with blank text");
                continue;
            }
            let seen_at = i64::try_from(seed.age_secs)
                .ok()
                .and_then(Duration::try_seconds)
                .and_then(|age| now.checked_sub_signed(age))
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            let category = match seed.category.trim() {
                "" => UNCATEGORIZED_SEED_CATEGORY,
                trimmed => trimmed,
            };
            let mut metadata = TermMetadata::new()
                .with_frequency(seed.frequency)
                .with_timestamp(seen_at)
                .with_category(category)
                .with_related_terms(seed.related_terms)
                .with_user_generated(false);
            if let Some(answer) = seed.direct_answer {
                metadata = metadata.with_direct_answer(answer);
            }
            self.index.insert_or_update_at(seed.text.trim(), metadata, now);
            loaded += 1;
        }
        debug!(loaded, total_terms = self.index.len(), "seed terms loaded");
        loaded
    }

    pub fn search(&mut self, query: &str) -> SearchOutcome {
        self.search_at(query, Utc::now())
    }

    /// Runs prefix lookup, intent classification and ranking for `query`.
    ///
    /// Blank queries return an empty outcome and leave analytics untouched.
    pub fn search_at(&mut self, query: &str, now: DateTime<Utc>) -> SearchOutcome {
        let started = Instant::now();
        if is_blank(query) {
            self.request_log
                .record("search", STATUS_NOOP, started, now, None);
            return SearchOutcome::empty(query);
        }

        let candidates = self.index.find_by_prefix(query);
        let candidate_count = candidates.len();
        let intent = self.classifier.classify(query);
        let suggestions = self.ranker.rank(candidates, query, intent, now);
        let direct_answer = find_direct_answer(&suggestions, query);

        let latency_ms = elapsed_ms(started);
        self.analytics.record_search(latency_ms);
        debug!(
            query,
            intent = %intent,
            candidates = candidate_count,
            returned = suggestions.len(),
            latency_ms,
            "search completed"
        );
        self.request_log.record(
            "search",
            STATUS_OK,
            started,
            now,
            Some(serde_json::json!({
                "query": truncate_text(query, LOGGED_QUERY_MAX_CHARS),
                "intent": intent,
                "candidates": candidate_count,
                "returned": suggestions.len(),
                "direct_answer": direct_answer.is_some(),
            })),
        );

        SearchOutcome {
            query: query.to_string(),
            suggestions,
            intent,
            direct_answer,
            latency_ms,
        }
    }

    pub fn commit_term(&mut self, raw_text: &str) -> CommitOutcome {
        self.commit_term_at(raw_text, Utc::now())
    }

    /// Records a submitted query.
    ///
    /// Unknown terms are learned as user-generated with frequency 1. Known
    /// terms only get a fresh timestamp; their frequency is left alone.
    pub fn commit_term_at(&mut self, raw_text: &str, now: DateTime<Utc>) -> CommitOutcome {
        let started = Instant::now();
        let Some(term) = normalize_term(raw_text) else {
            self.request_log
                .record("commit", STATUS_NOOP, started, now, None);
            return CommitOutcome {
                learned: false,
                term: String::new(),
            };
        };

        let learned = match self.index.get(&term) {
            Some(existing) => {
                self.index.insert_or_update_at(
                    &term,
                    TermMetadata::new()
                        .with_frequency(existing.frequency)
                        .with_timestamp(now),
                    now,
                );
                false
            }
            None => {
                self.index.insert_or_update_at(
                    &term,
                    TermMetadata::new()
                        .with_frequency(1)
                        .with_category(USER_SEARCH_CATEGORY)
                        .with_timestamp(now)
                        .with_user_generated(true),
                    now,
                );
                self.analytics.record_learned_term();
                info!(term = %term, "learned new term");
                true
            }
        };
        self.recent.push(&term);
        self.request_log.record(
            "commit",
            STATUS_OK,
            started,
            now,
            Some(serde_json::json!({ "term": term, "learned": learned })),
        );

        CommitOutcome { learned, term }
    }

    pub fn select_suggestion(&mut self, suggestion: &RankedSuggestion) {
        self.select_suggestion_at(suggestion, Utc::now());
    }

    /// Re-inserts a picked suggestion with its frequency bumped by one.
    /// Category, provenance, answer and related terms come from the snapshot.
    pub fn select_suggestion_at(&mut self, suggestion: &RankedSuggestion, now: DateTime<Utc>) {
        let started = Instant::now();
        let term = &suggestion.term;
        let mut metadata = TermMetadata::new()
            .with_frequency(term.frequency.saturating_add(1))
            .with_timestamp(now)
            .with_category(term.category.clone())
            .with_related_terms(term.related_terms.clone())
            .with_user_generated(term.is_user_generated);
        if let Some(answer) = &term.direct_answer {
            metadata = metadata.with_direct_answer(answer.clone());
        }
        let updated = self.index.insert_or_update_at(&term.text, metadata, now);
        self.recent.push(&updated.text);
        self.request_log.record(
            "select",
            STATUS_OK,
            started,
            now,
            Some(serde_json::json!({
                "term": updated.text,
                "frequency": updated.frequency,
            })),
        );
    }

    pub fn touch_recent(&mut self, term: &str) {
        self.touch_recent_at(term, Utc::now());
    }

    /// Timestamp-only refresh for a term replayed from history. Unknown or
    /// blank terms are ignored.
    pub fn touch_recent_at(&mut self, term: &str, now: DateTime<Utc>) {
        let started = Instant::now();
        let existing = normalize_term(term).and_then(|key| self.index.get(&key));
        let Some(existing) = existing else {
            self.request_log
                .record("touch", STATUS_NOOP, started, now, None);
            return;
        };

        self.index.insert_or_update_at(
            &existing.text,
            TermMetadata::new()
                .with_frequency(existing.frequency)
                .with_timestamp(now),
            now,
        );
        self.recent.push(&existing.text);
        self.request_log.record(
            "touch",
            STATUS_OK,
            started,
            now,
            Some(serde_json::json!({ "term": existing.text })),
        );
    }

    #[must_use]
    pub const fn analytics(&self) -> Analytics {
        self.analytics.snapshot()
    }

    #[must_use]
    pub const fn index(&self) -> &TermIndex {
        &self.index
    }

    #[must_use]
    pub fn recent_searches(&self) -> Vec<String> {
        self.recent.to_vec()
    }

    #[must_use]
    pub fn request_log(&self) -> Vec<RequestLogEntry> {
        self.request_log.to_vec()
    }
}

fn find_direct_answer(suggestions: &[RankedSuggestion], query: &str) -> Option<String> {
    let query_key = index_key(query);
    suggestions
        .iter()
        .find(|suggestion| suggestion.term.text == query_key)
        .filter(|suggestion| suggestion.term.has_direct_answer())
        .and_then(|suggestion| suggestion.term.direct_answer.clone())
}
