//! Size check and staged lossy reduction of a compressed context.
//!
//! Reductions run once, in a fixed order, without re-measuring between
//! them. This is a single pass, not an optimal packing.

pub mod fallback;
pub mod stages;

use coach_core::config::CompressionConfig;
use coach_core::models::{CompressedContext, TruncationStage};
use coach_core::traits::ITokenEstimator;
use coach_observability::events;
use coach_tokens::TokenBudget;
use tracing::debug;

/// Result of fitting a context to a budget.
#[derive(Debug, Clone)]
pub struct Truncated {
    pub context: CompressedContext,
    /// Estimate before any reduction.
    pub original_tokens: usize,
    /// Estimate of `context`.
    pub estimated_tokens: usize,
    /// Reductions that changed something, in order.
    pub stages: Vec<TruncationStage>,
}

/// Compact JSON form whose length the budget is measured against.
pub fn serialize(context: &CompressedContext) -> String {
    // Every map in the model has string keys, so this cannot fail.
    serde_json::to_string(context).unwrap_or_default()
}

/// Applies the reduction order against one estimator and config.
pub struct Truncator<'a> {
    budget: TokenBudget<'a>,
    config: &'a CompressionConfig,
}

impl<'a> Truncator<'a> {
    pub fn new(estimator: &'a dyn ITokenEstimator, config: &'a CompressionConfig) -> Self {
        Self {
            budget: TokenBudget::new(estimator),
            config,
        }
    }

    pub fn estimate(&self, context: &CompressedContext) -> usize {
        self.budget.estimate(&serialize(context))
    }

    /// Fit `candidate` into `max_tokens`.
    ///
    /// 1. Unchanged if it already fits.
    /// 2. Otherwise shorten summaries, cap workouts, cap facts; then measure once.
    /// 3. Still over: cut the serialized form at the byte budget and try to re-parse.
    /// 4. Re-parse fails or is still over: minimal fallback object.
    ///
    /// # Panics
    /// Panics if `max_tokens` is zero.
    pub fn truncate_to_token_limit(
        &self,
        candidate: CompressedContext,
        max_tokens: usize,
    ) -> Truncated {
        assert!(max_tokens > 0, "max_tokens must be greater than zero");

        let serialized = serialize(&candidate);
        let original_tokens = self.budget.estimate(&serialized);
        if self.budget.fits(&serialized, max_tokens) {
            return Truncated {
                context: candidate,
                original_tokens,
                estimated_tokens: original_tokens,
                stages: Vec::new(),
            };
        }

        let span = coach_observability::truncation_span!(original_tokens, max_tokens);
        let _guard = span.enter();

        let mut context = candidate;
        let mut applied = Vec::new();

        if stages::shorten_summaries(&mut context, self.config.summary_char_limit) {
            applied.push(TruncationStage::SummariesShortened);
        }
        if stages::cap_workouts(&mut context, self.config.truncated_workout_limit) {
            applied.push(TruncationStage::WorkoutsCapped);
        }
        if stages::cap_facts(
            &mut context,
            self.config.truncated_fact_limit,
            self.config.preserve_constraints_on_truncation,
        ) {
            applied.push(TruncationStage::FactsCapped);
        }

        let reduced = serialize(&context);
        let reduced_tokens = self.budget.estimate(&reduced);
        for stage in &applied {
            events::truncation_stage_applied(*stage, reduced_tokens);
        }

        let overflow = self.budget.overflow(&reduced, max_tokens);
        if overflow == 0 {
            return Truncated {
                context,
                original_tokens,
                estimated_tokens: reduced_tokens,
                stages: applied,
            };
        }

        debug!(overflow, "still over budget after ordered stages");
        let max_chars = (max_tokens * self.config.chars_per_token)
            .saturating_sub(coach_core::constants::SERIALIZED_CUT_MARGIN);
        if let Some(parsed) = fallback::reparse_cut(&reduced, max_chars) {
            let parsed_json = serialize(&parsed);
            let parsed_tokens = self.budget.estimate(&parsed_json);
            if self.budget.fits(&parsed_json, max_tokens) {
                applied.push(TruncationStage::SerializedCut);
                events::truncation_stage_applied(TruncationStage::SerializedCut, parsed_tokens);
                return Truncated {
                    context: parsed,
                    original_tokens,
                    estimated_tokens: parsed_tokens,
                    stages: applied,
                };
            }
            debug!(parsed_tokens, max_tokens, "serialized cut parsed but still over budget");
        }

        let minimal = fallback::minimal(&context, self.config);
        let minimal_tokens = self.estimate(&minimal);
        applied.push(TruncationStage::MinimalFallback);
        events::fallback_triggered(reduced_tokens, max_tokens, "serialized cut unusable");

        Truncated {
            context: minimal,
            original_tokens,
            estimated_tokens: minimal_tokens,
            stages: applied,
        }
    }
}
