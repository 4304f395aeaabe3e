use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_searches: u64,
    pub average_latency_ms: f64,
    pub new_terms_learned: u64,
}
