use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Goal, KeyPreferences, LongTermTrends, Meal, MemoryFact, UserProfile, WorkoutSession};

/// The structural reduction of a [`RawContext`](super::RawContext): most relevant first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct PrioritizedView {
    pub profile: UserProfile,
    /// Goals not explicitly retired.
    pub current_goals: Vec<Goal>,
    /// Newest first.
    pub recent_workouts: Vec<WorkoutSession>,
    /// Meals logged on the local calendar day of compression.
    pub todays_meals: Vec<Meal>,
    /// Constraints first, then ranked facts.
    pub relevant_facts: Vec<MemoryFact>,
    pub key_preferences: KeyPreferences,
}

/// Fixed-shape, budget-bounded digest of a user's history.
///
/// Each top-level field maps to one prompt section in the consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressedContext {
    pub profile: UserProfile,
    pub current_goals: Vec<Goal>,
    pub workout_summary: String,
    pub nutrition_summary: String,
    pub activity_summary: String,
    pub recent_workouts: Vec<WorkoutSession>,
    pub todays_meals: Vec<Meal>,
    pub relevant_facts: Vec<MemoryFact>,
    pub key_preferences: KeyPreferences,
    pub trends: LongTermTrends,
}

impl CompressedContext {
    /// Combine a prioritized view with the three summaries and the trends.
    pub fn assemble(
        view: PrioritizedView,
        workout_summary: String,
        nutrition_summary: String,
        activity_summary: String,
        trends: LongTermTrends,
    ) -> Self {
        Self {
            profile: view.profile,
            current_goals: view.current_goals,
            workout_summary,
            nutrition_summary,
            activity_summary,
            recent_workouts: view.recent_workouts,
            todays_meals: view.todays_meals,
            relevant_facts: view.relevant_facts,
            key_preferences: view.key_preferences,
            trends,
        }
    }
}
