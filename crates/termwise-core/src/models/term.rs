use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const USER_SEARCH_CATEGORY: &str = "User Search";
/// Stands in for a blank seed category so reference terms never look learned.
pub const UNCATEGORIZED_SEED_CATEGORY: &str = "Uncategorized";

/// Snapshot of one known term. Values handed out by the index are copies; the
/// index keeps its own state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    pub text: String,
    pub frequency: u64,
    pub last_seen_at: DateTime<Utc>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_answer: Option<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    pub is_user_generated: bool,
}

impl TermRecord {
    #[must_use]
    pub fn has_direct_answer(&self) -> bool {
        self.direct_answer
            .as_deref()
            .is_some_and(|answer| !answer.trim().is_empty())
    }
}

/// Partial update applied by `TermIndex::insert_or_update`.
///
/// Absent fields keep whatever the index already holds for the term, with one
/// exception: an absent `frequency` bumps the stored counter by one. Callers
/// that want a pure timestamp refresh pass the current frequency explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_terms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_user_generated: Option<bool>,
}

impl TermMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_direct_answer(mut self, answer: impl Into<String>) -> Self {
        self.direct_answer = Some(answer.into());
        self
    }

    #[must_use]
    pub fn with_related_terms(mut self, related: Vec<String>) -> Self {
        self.related_terms = Some(related);
        self
    }

    #[must_use]
    pub fn with_user_generated(mut self, is_user_generated: bool) -> Self {
        self.is_user_generated = Some(is_user_generated);
        self
    }
}

/// Reference term loaded at session start. Seeded terms are never flagged as
/// user generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedTerm {
    pub text: String,
    pub category: String,
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_terms: Vec<String>,
    /// Seconds since the term was last seen, relative to load time.
    #[serde(default)]
    pub age_secs: u64,
}

impl SeedTerm {
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>, frequency: u64) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            frequency,
            direct_answer: None,
            related_terms: Vec::new(),
            age_secs: 0,
        }
    }

    #[must_use]
    pub fn with_direct_answer(mut self, answer: impl Into<String>) -> Self {
        self.direct_answer = Some(answer.into());
        self
    }

    #[must_use]
    pub fn with_age_secs(mut self, age_secs: u64) -> Self {
        self.age_secs = age_secs;
        self
    }
}
