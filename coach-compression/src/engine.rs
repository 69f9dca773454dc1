use std::time::Instant;

use chrono::{DateTime, Local};
use coach_core::config::CompressionConfig;
use coach_core::errors::CoachResult;
use coach_core::models::{
    Activity, CompressedContext, CompressionOutcome, CompressionReport, CompressionRequest, Meal,
    MemoryFact, PrioritizedView, RawContext, WorkoutSession,
};
use coach_core::traits::{IContextCompressor, ITokenEstimator};
use coach_observability::events;
use coach_tokens::HeuristicEstimator;

use crate::prioritizer::Prioritizer;
use crate::summarize;
use crate::truncation::Truncator;

/// Context compression engine.
///
/// Prioritizes, summarizes and selects facts, then truncates the assembled
/// candidate to the token budget. Stateless between calls; a single engine
/// can serve concurrent requests.
pub struct ContextCompressor {
    config: CompressionConfig,
    prioritizer: Prioritizer,
    estimator: Box<dyn ITokenEstimator>,
}

impl ContextCompressor {
    /// Engine with default config and the chars/4 heuristic estimator.
    pub fn new() -> Self {
        Self::with_config(CompressionConfig::default())
    }

    /// Validate `config` and build an engine around it.
    pub fn from_config(config: CompressionConfig) -> CoachResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: CompressionConfig) -> Self {
        let estimator = HeuristicEstimator::new(config.chars_per_token);
        Self {
            prioritizer: Prioritizer::from_config(&config),
            config,
            estimator: Box::new(estimator),
        }
    }

    /// Replace the size estimator (e.g. with an exact `TokenCounter`).
    pub fn with_estimator(mut self, estimator: impl ITokenEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Query-less request for the configured `default_max_tokens`.
    pub fn default_request(&self) -> CompressionRequest {
        CompressionRequest::new(self.config.default_max_tokens)
    }

    /// Compress with the configured default budget.
    pub fn compress_with_default_budget(&self, context: &RawContext) -> CompressedContext {
        self.compress_with_request(context, &self.default_request())
    }

    /// Estimate of `context` under the configured estimator.
    pub fn estimate(&self, context: &CompressedContext) -> usize {
        self.truncator().estimate(context)
    }

    fn truncator(&self) -> Truncator<'_> {
        Truncator::new(self.estimator.as_ref(), &self.config)
    }

    /// Structural reduction relative to the local moment `now`.
    pub fn prioritize_context_at(&self, context: &RawContext, now: DateTime<Local>) -> PrioritizedView {
        self.prioritizer.prioritize(context, now, None)
    }

    /// `compress_context` with a fixed "now".
    ///
    /// # Panics
    /// Panics if `max_tokens` is zero.
    pub fn compress_context_at(
        &self,
        context: &RawContext,
        max_tokens: usize,
        now: DateTime<Local>,
    ) -> CompressedContext {
        self.compress_with_report_at(context, &CompressionRequest::new(max_tokens), now)
            .context
    }

    /// Compress with the request's budget and optional query.
    pub fn compress_with_request(
        &self,
        context: &RawContext,
        request: &CompressionRequest,
    ) -> CompressedContext {
        self.compress_with_report(context, request).context
    }

    /// Compress and report what truncation did.
    pub fn compress_with_report(
        &self,
        context: &RawContext,
        request: &CompressionRequest,
    ) -> CompressionOutcome {
        self.compress_with_report_at(context, request, Local::now())
    }

    /// Full pipeline against a fixed "now".
    ///
    /// # Panics
    /// Panics if `request.max_tokens` is zero.
    pub fn compress_with_report_at(
        &self,
        context: &RawContext,
        request: &CompressionRequest,
        now: DateTime<Local>,
    ) -> CompressionOutcome {
        assert!(request.max_tokens > 0, "max_tokens must be greater than zero");

        let span = coach_observability::compression_span!(request.max_tokens, request.query.is_some());
        let _guard = span.enter();
        let started = Instant::now();

        let view = self
            .prioritizer
            .prioritize(context, now, request.query.as_deref());
        let candidate = CompressedContext::assemble(
            view,
            summarize::summarize_workouts(&context.recent_workouts),
            summarize::summarize_nutrition(&context.recent_meals),
            summarize::summarize_activities(&context.recent_activities),
            context.long_term_trends.clone(),
        );

        let truncated = self
            .truncator()
            .truncate_to_token_limit(candidate, request.max_tokens);

        let report = CompressionReport {
            original_tokens: truncated.original_tokens,
            estimated_tokens: truncated.estimated_tokens,
            max_tokens: request.max_tokens,
            stages: truncated.stages,
            elapsed_micros: started.elapsed().as_micros() as u64,
        };
        events::compression_completed(&report);

        CompressionOutcome {
            context: truncated.context,
            report,
        }
    }
}

impl Default for ContextCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl IContextCompressor for ContextCompressor {
    fn compress_context(&self, context: &RawContext, max_tokens: usize) -> CompressedContext {
        self.compress_context_at(context, max_tokens, Local::now())
    }

    fn prioritize_context(&self, context: &RawContext) -> PrioritizedView {
        self.prioritize_context_at(context, Local::now())
    }

    fn summarize_workouts(&self, workouts: &[WorkoutSession]) -> String {
        summarize::summarize_workouts(workouts)
    }

    fn summarize_nutrition(&self, meals: &[Meal]) -> String {
        summarize::summarize_nutrition(meals)
    }

    fn summarize_activities(&self, activities: &[Activity]) -> String {
        summarize::summarize_activities(activities)
    }

    fn select_relevant_facts(&self, facts: &[MemoryFact], query: Option<&str>) -> Vec<MemoryFact> {
        self.prioritizer.selector().select(facts, query)
    }
}
