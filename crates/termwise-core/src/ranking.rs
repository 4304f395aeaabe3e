mod config;
mod ranker;
mod scoring;

pub use config::{DEFAULT_MAX_SUGGESTIONS, RankingConfig};
pub use ranker::{RankTier, SuggestionRanker};
pub use scoring::{RelevanceScorer, elapsed_hours};
