//! Fact selection: constraints always kept, everything else filtered by
//! confidence, ranked, and capped.

pub mod ordering;
pub mod relevance;

use coach_core::config::CompressionConfig;
use coach_core::models::MemoryFact;

/// Ranks and bounds a pool of memory facts.
#[derive(Debug, Clone)]
pub struct FactSelector {
    min_confidence: f64,
    max_ranked: usize,
}

impl FactSelector {
    pub fn new(min_confidence: f64, max_ranked: usize) -> Self {
        Self {
            min_confidence,
            max_ranked,
        }
    }

    pub fn from_config(config: &CompressionConfig) -> Self {
        Self::new(config.min_fact_confidence, config.max_ranked_facts)
    }

    /// Select the facts worth carrying into a prompt.
    ///
    /// 1. Every constraint in the pool, in input order, regardless of confidence.
    /// 2. Non-constraints with confidence ≥ the threshold, ranked by query
    ///    relevance when a query is given, otherwise by confidence then recency.
    /// 3. Only the ranked list is capped.
    pub fn select(&self, facts: &[MemoryFact], query: Option<&str>) -> Vec<MemoryFact> {
        if facts.is_empty() {
            return Vec::new();
        }

        let constraints = facts.iter().filter(|f| f.is_constraint());
        let mut others: Vec<&MemoryFact> = facts
            .iter()
            .filter(|f| !f.is_constraint() && f.confidence.value() >= self.min_confidence)
            .collect();

        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => relevance::sort_by_relevance(&mut others, q),
            None => ordering::sort_by_confidence_then_recency(&mut others),
        }

        constraints
            .chain(others.into_iter().take(self.max_ranked))
            .cloned()
            .collect()
    }
}

impl Default for FactSelector {
    fn default() -> Self {
        Self::from_config(&CompressionConfig::default())
    }
}
