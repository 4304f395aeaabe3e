use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_LIMIT: usize = 10;
pub const DEFAULT_REQUEST_LOG_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Length of the most-recent-first list of committed terms.
    pub recent_limit: usize,
    /// Request log entries kept in memory; oldest entries are dropped first.
    pub request_log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            request_log_capacity: DEFAULT_REQUEST_LOG_CAPACITY,
        }
    }
}
