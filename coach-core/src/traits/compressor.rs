use crate::models::{
    Activity, CompressedContext, Meal, MemoryFact, PrioritizedView, RawContext, WorkoutSession,
};

/// Budget-bounded context compression.
///
/// Every method is infallible: empty inputs produce sentinel summaries and
/// empty collections, and an unreachable budget produces the minimal fallback.
pub trait IContextCompressor: Send + Sync {
    /// Full pipeline: prioritize, summarize, select facts, truncate to `max_tokens`.
    ///
    /// # Panics
    /// Implementations panic when `max_tokens` is zero.
    fn compress_context(&self, context: &RawContext, max_tokens: usize) -> CompressedContext;

    /// Structural reduction only (no summaries, no truncation).
    fn prioritize_context(&self, context: &RawContext) -> PrioritizedView;

    fn summarize_workouts(&self, workouts: &[WorkoutSession]) -> String;

    fn summarize_nutrition(&self, meals: &[Meal]) -> String;

    fn summarize_activities(&self, activities: &[Activity]) -> String;

    /// Constraints first, then the top-ranked remaining facts.
    fn select_relevant_facts(&self, facts: &[MemoryFact], query: Option<&str>) -> Vec<MemoryFact>;
}
