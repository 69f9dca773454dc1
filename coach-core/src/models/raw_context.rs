use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{
    Activity, ConversationSummary, Goal, LongTermTrends, Meal, MemoryFact, NutritionPattern,
    PreferenceProfile, UserProfile, WorkoutPattern, WorkoutSession,
};

/// Everything the data layer knows about a user, assembled once per request.
/// Read-only to compression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct RawContext {
    pub profile: UserProfile,
    pub goals: Vec<Goal>,
    pub recent_workouts: Vec<WorkoutSession>,
    pub recent_meals: Vec<Meal>,
    pub recent_activities: Vec<Activity>,
    pub memory_facts: Vec<MemoryFact>,
    pub preference_profile: Option<PreferenceProfile>,
    pub workout_patterns: Vec<WorkoutPattern>,
    pub nutrition_patterns: Vec<NutritionPattern>,
    pub long_term_trends: LongTermTrends,
    pub conversation_summaries: Vec<ConversationSummary>,
}
