use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::RequestLogEntry;

pub(crate) const STATUS_OK: &str = "ok";
pub(crate) const STATUS_NOOP: &str = "noop";

/// Bounded in-memory request log; the oldest entry goes first when full.
#[derive(Debug, Clone)]
pub(crate) struct RequestLog {
    entries: VecDeque<RequestLogEntry>,
    capacity: usize,
}

impl RequestLog {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub(crate) fn record(
        &mut self,
        operation: &str,
        status: &str,
        started: Instant,
        now: DateTime<Utc>,
        details: Option<serde_json::Value>,
    ) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(RequestLogEntry {
            request_id: Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: elapsed_ms(started),
            created_at: now.to_rfc3339(),
            details,
        });
    }

    pub(crate) fn to_vec(&self) -> Vec<RequestLogEntry> {
        self.entries.iter().cloned().collect()
    }
}

pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
