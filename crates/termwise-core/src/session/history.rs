use std::collections::VecDeque;

/// Most-recent-first list of committed or selected terms, without duplicates.
#[derive(Debug, Clone)]
pub(crate) struct RecentSearches {
    entries: VecDeque<String>,
    limit: usize,
}

impl RecentSearches {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub(crate) fn push(&mut self, term: &str) {
        self.entries.retain(|existing| existing != term);
        self.entries.push_front(term.to_string());
        self.entries.truncate(self.limit);
    }

    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
