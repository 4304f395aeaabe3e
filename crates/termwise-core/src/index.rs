use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{TermMetadata, TermRecord, USER_SEARCH_CATEGORY};
use crate::text::index_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
struct TermEntry {
    frequency: u64,
    last_seen_at: DateTime<Utc>,
    category: String,
    direct_answer: Option<String>,
    related_terms: Vec<String>,
    is_user_generated: bool,
}

impl TermEntry {
    fn merge(existing: Option<Self>, metadata: TermMetadata, now: DateTime<Utc>) -> Self {
        let current_frequency = existing.as_ref().map_or(0, |entry| entry.frequency);
        let (category, direct_answer, related_terms, is_user_generated) = match existing {
            Some(entry) => (
                Some(entry.category),
                entry.direct_answer,
                entry.related_terms,
                entry.is_user_generated,
            ),
            None => (None, None, Vec::new(), false),
        };

        Self {
            frequency: metadata
                .frequency
                .unwrap_or_else(|| current_frequency.saturating_add(1)),
            last_seen_at: metadata.timestamp.unwrap_or(now),
            category: non_empty(metadata.category)
                .or(category)
                .unwrap_or_else(|| USER_SEARCH_CATEGORY.to_string()),
            direct_answer: non_empty(metadata.direct_answer).or(direct_answer),
            related_terms: metadata.related_terms.unwrap_or(related_terms),
            is_user_generated: metadata.is_user_generated.unwrap_or(is_user_generated),
        }
    }

    fn to_record(&self, text: &str) -> TermRecord {
        TermRecord {
            text: text.to_string(),
            frequency: self.frequency,
            last_seen_at: self.last_seen_at,
            category: self.category.clone(),
            direct_answer: self.direct_answer.clone(),
            related_terms: self.related_terms.clone(),
            is_user_generated: self.is_user_generated,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.is_empty())
}

#[derive(Debug, Clone, Default)]
struct TermNode {
    children: BTreeMap<char, NodeId>,
    // Terminal iff an entry is present.
    entry: Option<TermEntry>,
}

/// Prefix tree over lowercased terms.
///
/// Nodes live in one arena and refer to each other by index, so the tree has a
/// single owner and traversal never chases references. Each node maps a `char`
/// to its child; terms may use any alphabet.
#[derive(Debug, Clone)]
pub struct TermIndex {
    nodes: Vec<TermNode>,
    term_count: usize,
}

impl Default for TermIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TermIndex {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TermNode::default()],
            term_count: 0,
        }
    }

    pub fn insert_or_update(&mut self, term: &str, metadata: TermMetadata) -> TermRecord {
        self.insert_or_update_at(term, metadata, Utc::now())
    }

    /// Inserts `term` or merges `metadata` into its existing record.
    ///
    /// `now` stands in for a missing `metadata.timestamp`. Callers must reject
    /// blank terms before calling; the index stores whatever key it is given.
    pub fn insert_or_update_at(
        &mut self,
        term: &str,
        metadata: TermMetadata,
        now: DateTime<Utc>,
    ) -> TermRecord {
        let key = index_key(term);
        let mut node = ROOT;
        for ch in key.chars() {
            node = self.child_or_insert(node, ch);
        }

        let slot = &mut self.nodes[node.0];
        let existing = slot.entry.take();
        if existing.is_none() {
            self.term_count += 1;
        }
        let merged = TermEntry::merge(existing, metadata, now);
        let record = merged.to_record(&key);
        self.nodes[node.0].entry = Some(merged);
        record
    }

    #[must_use]
    pub fn exists(&self, term: &str) -> bool {
        self.terminal_entry(&index_key(term)).is_some()
    }

    #[must_use]
    pub fn get(&self, term: &str) -> Option<TermRecord> {
        let key = index_key(term);
        self.terminal_entry(&key).map(|entry| entry.to_record(&key))
    }

    /// Every known term under `prefix`, the prefix itself included.
    ///
    /// Records come back in depth-first order over the child maps, which is
    /// lexicographic by `char`. Ranking is left to the caller.
    #[must_use]
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<TermRecord> {
        let key = index_key(prefix);
        let Some(start) = self.walk(&key) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut stack = vec![(start, key)];
        while let Some((id, path)) = stack.pop() {
            let node = &self.nodes[id.0];
            if let Some(entry) = &node.entry {
                out.push(entry.to_record(&path));
            }
            for (ch, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(path.len() + ch.len_utf8());
                next.push_str(&path);
                next.push(*ch);
                stack.push((*child, next));
            }
        }
        out
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.term_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(child) = self.nodes[parent.0].children.get(&ch) {
            return *child;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(TermNode::default());
        self.nodes[parent.0].children.insert(ch, child);
        child
    }

    fn walk(&self, key: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in key.chars() {
            node = *self.nodes[node.0].children.get(&ch)?;
        }
        Some(node)
    }

    fn terminal_entry(&self, key: &str) -> Option<&TermEntry> {
        self.walk(key)
            .and_then(|id| self.nodes[id.0].entry.as_ref())
    }
}

#[cfg(test)]
mod tests;
