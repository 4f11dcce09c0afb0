//! Retrieval Engine: ranks knowledge records against a query.
//!
//! Scoring is plain substring matching over the lowercased query:
//! - title contains the query: +10
//! - per keyword, query contains keyword or keyword contains query: +5
//! - content contains the query: +2
//!
//! Overlapping hits stack without a cap. Ranking depends on it, so the
//! arithmetic must stay exactly as is.

use std::time::Instant;

use tracing::debug;

use crate::knowledge::{KnowledgeRecord, KnowledgeStore};
use crate::metrics;

pub const TITLE_WEIGHT: u32 = 10;
pub const KEYWORD_WEIGHT: u32 = 5;
pub const CONTENT_WEIGHT: u32 = 2;

/// Maximum number of results returned by default.
pub const DEFAULT_LIMIT: usize = 3;

/// A record paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    pub record: &'a KnowledgeRecord,
    pub score: u32,
}

/// Stateless ranker over a borrowed [`KnowledgeStore`].
#[derive(Debug, Clone, Copy)]
pub struct RetrievalEngine<'a> {
    store: &'a KnowledgeStore,
    limit: usize,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self {
            store,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score every record and return the best matches, highest first.
    ///
    /// Only records with a positive score are returned. Ties keep store order.
    /// An empty or whitespace-only query matches nothing.
    pub fn search(&self, query: &str) -> Vec<ScoredRecord<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let started = Instant::now();
        let query = query.to_lowercase();

        let mut scored: Vec<ScoredRecord<'a>> = self
            .store
            .iter()
            .filter_map(|record| {
                let score = score_record(record, &query);
                (score > 0).then_some(ScoredRecord { record, score })
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);

        debug!(query = %query, hits = scored.len(), "knowledge search");
        metrics::record_search(started.elapsed(), scored.len());

        scored
    }
}

/// Score a single record against an already-lowercased query.
pub fn score_record(record: &KnowledgeRecord, query: &str) -> u32 {
    let mut score = 0;

    if record.title.to_lowercase().contains(query) {
        score += TITLE_WEIGHT;
    }

    for keyword in &record.keywords {
        if query.contains(keyword.as_str()) || keyword.contains(query) {
            score += KEYWORD_WEIGHT;
        }
    }

    if record.content.to_lowercase().contains(query) {
        score += CONTENT_WEIGHT;
    }

    score
}
