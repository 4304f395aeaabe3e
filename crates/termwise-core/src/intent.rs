use crate::models::IntentLabel;

const INTENT_KEYWORDS: &[(&str, IntentLabel)] = &[
    ("how", IntentLabel::Question),
    ("what", IntentLabel::Definition),
    ("where", IntentLabel::Location),
    ("when", IntentLabel::Time),
    ("why", IntentLabel::Explanation),
    ("buy", IntentLabel::Commerce),
    ("price", IntentLabel::Commerce),
    ("learn", IntentLabel::Educational),
];

/// Keyword-table intent heuristic. The earliest matching token wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> IntentLabel {
        text.to_lowercase()
            .split_whitespace()
            .find_map(keyword_label)
            .unwrap_or_default()
    }
}

fn keyword_label(token: &str) -> Option<IntentLabel> {
    INTENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == token)
        .map(|(_, label)| *label)
}
