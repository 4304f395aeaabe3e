// Fallible APIs in this crate share one error contract (`TermwiseError`);
// per-function `# Errors` sections would only repeat it.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod error;
pub mod index;
pub mod intent;
pub mod models;
pub mod ranking;
pub mod seed;
pub mod session;
pub mod text;

pub use config::AppConfig;
pub use error::{Result, TermwiseError};
pub use index::TermIndex;
pub use intent::IntentClassifier;
pub use ranking::{RelevanceScorer, SuggestionRanker};
pub use session::SearchSession;
