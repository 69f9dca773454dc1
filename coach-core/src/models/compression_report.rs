use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::CompressedContext;
use crate::constants::DEFAULT_MAX_TOKENS;
use crate::errors::{CoachError, CoachResult};

/// One lossy reduction applied by truncation, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TruncationStage {
    /// Summary strings cut to the character limit.
    SummariesShortened,
    /// Recent workouts capped.
    WorkoutsCapped,
    /// Relevant facts capped.
    FactsCapped,
    /// Serialized form cut at the byte budget and re-parsed.
    SerializedCut,
    /// Minimal guaranteed object returned.
    MinimalFallback,
}

impl TruncationStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SummariesShortened => "summaries_shortened",
            Self::WorkoutsCapped => "workouts_capped",
            Self::FactsCapped => "facts_capped",
            Self::SerializedCut => "serialized_cut",
            Self::MinimalFallback => "minimal_fallback",
        }
    }
}

/// Parameters of a single compression call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompressionRequest {
    pub max_tokens: usize,
    /// Incoming user message, used to rank facts by relevance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl CompressionRequest {
    /// Request with a budget and no query.
    ///
    /// # Panics
    /// Panics if `max_tokens` is zero.
    pub fn new(max_tokens: usize) -> Self {
        assert!(max_tokens > 0, "max_tokens must be greater than zero");
        Self {
            max_tokens,
            query: None,
        }
    }

    /// Checked constructor for budgets that come from untrusted input.
    pub fn try_new(max_tokens: usize) -> CoachResult<Self> {
        if max_tokens == 0 {
            return Err(CoachError::InvalidBudget { max_tokens });
        }
        Ok(Self::new(max_tokens))
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }
}

impl Default for CompressionRequest {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS)
    }
}

/// What compression did to reach the budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompressionReport {
    /// Estimate of the untruncated candidate.
    pub original_tokens: usize,
    /// Estimate of the returned context.
    pub estimated_tokens: usize,
    pub max_tokens: usize,
    pub stages: Vec<TruncationStage>,
    pub elapsed_micros: u64,
}

impl CompressionReport {
    /// True when any truncation stage ran.
    pub fn compressed(&self) -> bool {
        !self.stages.is_empty()
    }

    pub fn used_fallback(&self) -> bool {
        self.stages.contains(&TruncationStage::MinimalFallback)
    }

    pub fn within_budget(&self) -> bool {
        self.estimated_tokens <= self.max_tokens
    }
}

/// A compressed context together with its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompressionOutcome {
    pub context: CompressedContext,
    pub report: CompressionReport,
}
