use serde::{Deserialize, Serialize};

use super::term::TermRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentLabel {
    Question,
    Definition,
    Location,
    Time,
    Explanation,
    Commerce,
    Educational,
    #[default]
    General,
}

impl IntentLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Definition => "definition",
            Self::Location => "location",
            Self::Time => "time",
            Self::Explanation => "explanation",
            Self::Commerce => "commerce",
            Self::Educational => "educational",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSuggestion {
    #[serde(flatten)]
    pub term: TermRecord,
    pub relevance: f64,
    pub combined_score: f64,
    pub fresh_user_term: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub query: String,
    pub suggestions: Vec<RankedSuggestion>,
    pub intent: IntentLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_answer: Option<String>,
    pub latency_ms: f64,
}

impl SearchOutcome {
    #[must_use]
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            suggestions: Vec::new(),
            intent: IntentLabel::General,
            direct_answer: None,
            latency_ms: 0.0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub learned: bool,
    pub term: String,
}
