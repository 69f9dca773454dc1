//! Last-resort reductions once the ordered stages are not enough.

use coach_core::config::CompressionConfig;
use coach_core::constants::{
    FALLBACK_ACTIVITY_SUMMARY, FALLBACK_NUTRITION_SUMMARY, FALLBACK_WORKOUT_SUMMARY,
    SERIALIZED_CUT_CLOSER,
};
use coach_core::models::CompressedContext;

/// Cut `serialized` to at most `max_chars` bytes (on a char boundary), close
/// it with `"}}}`, and try to parse it back.
///
/// Only a cut that ends inside a string three objects deep can re-parse;
/// anywhere else yields `None`.
pub fn reparse_cut(serialized: &str, max_chars: usize) -> Option<CompressedContext> {
    let mut end = max_chars.min(serialized.len());
    while end > 0 && !serialized.is_char_boundary(end) {
        end -= 1;
    }
    let attempt = format!("{}{}", &serialized[..end], SERIALIZED_CUT_CLOSER);
    serde_json::from_str(&attempt).ok()
}

/// The minimal object: profile, a few goals/meals/facts, generic summaries,
/// no workouts, preferences and trends passed through.
pub fn minimal(context: &CompressedContext, config: &CompressionConfig) -> CompressedContext {
    CompressedContext {
        profile: context.profile.clone(),
        current_goals: head(&context.current_goals, config.fallback_goal_limit),
        workout_summary: FALLBACK_WORKOUT_SUMMARY.to_string(),
        nutrition_summary: FALLBACK_NUTRITION_SUMMARY.to_string(),
        activity_summary: FALLBACK_ACTIVITY_SUMMARY.to_string(),
        recent_workouts: Vec::new(),
        todays_meals: head(&context.todays_meals, config.fallback_meal_limit),
        relevant_facts: head(&context.relevant_facts, config.fallback_fact_limit),
        key_preferences: context.key_preferences.clone(),
        trends: context.trends.clone(),
    }
}

fn head<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::TrendDirection;

    #[test]
    fn cut_inside_a_top_level_string_does_not_parse() {
        let context = CompressedContext {
            workout_summary: "x".repeat(50),
            ..CompressedContext::default()
        };
        let serialized = serde_json::to_string(&context).unwrap();
        let cut = serialized.find("xxxx").unwrap() + 10;
        assert!(reparse_cut(&serialized, cut).is_none());
    }

    #[test]
    fn cut_inside_a_trend_direction_reparses() {
        let mut context = CompressedContext::default();
        context.trends.workout_frequency_trend.direction = TrendDirection::Increasing;
        context.trends.workout_frequency_trend.change_rate = 5.0;
        let serialized = serde_json::to_string(&context).unwrap();
        let cut = serialized.find("\"increasing\"").unwrap() + "\"increasing".len();

        let parsed = reparse_cut(&serialized, cut).expect("closes at object depth three");
        assert_eq!(
            parsed.trends.workout_frequency_trend.direction,
            TrendDirection::Increasing
        );
        assert_eq!(parsed.trends.workout_frequency_trend.change_rate, 0.0);
    }

    #[test]
    fn cut_never_splits_a_char() {
        assert!(reparse_cut("{\"a\":\"ééé\"}", 7).is_none());
    }

    #[test]
    fn minimal_keeps_only_the_heads() {
        let context = CompressedContext {
            current_goals: vec![Default::default(); 4],
            workout_summary: "long".repeat(100),
            ..CompressedContext::default()
        };
        let minimal = minimal(&context, &CompressionConfig::default());
        assert_eq!(minimal.current_goals.len(), 2);
        assert_eq!(minimal.workout_summary, FALLBACK_WORKOUT_SUMMARY);
        assert!(minimal.recent_workouts.is_empty());
    }
}
