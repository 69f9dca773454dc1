//! Structural reduction of a raw context: most relevant first.

use chrono::{DateTime, Local};
use coach_core::config::CompressionConfig;
use coach_core::models::{KeyPreferences, Meal, PrioritizedView, RawContext, WorkoutSession};

use crate::facts::FactSelector;
use crate::summarize::local_date;

/// Filters goals and meals, orders workouts, selects facts, flattens preferences.
#[derive(Debug, Clone)]
pub struct Prioritizer {
    recent_workout_limit: usize,
    selector: FactSelector,
}

impl Prioritizer {
    pub fn new(recent_workout_limit: usize, selector: FactSelector) -> Self {
        Self {
            recent_workout_limit,
            selector,
        }
    }

    pub fn from_config(config: &CompressionConfig) -> Self {
        Self::new(
            config.recent_workout_limit,
            FactSelector::from_config(config),
        )
    }

    pub fn selector(&self) -> &FactSelector {
        &self.selector
    }

    /// Reduce `context` relative to the local moment `now`.
    pub fn prioritize(
        &self,
        context: &RawContext,
        now: DateTime<Local>,
        query: Option<&str>,
    ) -> PrioritizedView {
        let current_goals = context
            .goals
            .iter()
            .filter(|g| g.is_current())
            .cloned()
            .collect();

        PrioritizedView {
            profile: context.profile.clone(),
            current_goals,
            recent_workouts: self.recent_workouts(&context.recent_workouts),
            todays_meals: todays_meals(&context.recent_meals, now),
            relevant_facts: self.selector.select(&context.memory_facts, query),
            key_preferences: context
                .preference_profile
                .as_ref()
                .map(KeyPreferences::from)
                .unwrap_or_default(),
        }
    }

    /// Newest first, capped.
    fn recent_workouts(&self, workouts: &[WorkoutSession]) -> Vec<WorkoutSession> {
        let mut sorted = workouts.to_vec();
        sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sorted.truncate(self.recent_workout_limit);
        sorted
    }
}

impl Default for Prioritizer {
    fn default() -> Self {
        Self::from_config(&CompressionConfig::default())
    }
}

/// Meals whose local calendar date equals that of `now`.
pub fn todays_meals(meals: &[Meal], now: DateTime<Local>) -> Vec<Meal> {
    let today = now.date_naive();
    meals
        .iter()
        .filter(|m| local_date(m.logged_at) == today)
        .cloned()
        .collect()
}
