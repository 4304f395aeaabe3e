mod analytics;
mod search;
mod term;
mod trace;

pub use analytics::Analytics;
pub use search::{CommitOutcome, IntentLabel, RankedSuggestion, SearchOutcome};
pub use term::{
    SeedTerm, TermMetadata, TermRecord, UNCATEGORIZED_SEED_CATEGORY, USER_SEARCH_CATEGORY,
};
pub use trace::RequestLogEntry;
