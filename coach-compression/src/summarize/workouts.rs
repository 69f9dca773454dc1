use coach_core::constants::NO_WORKOUTS_SUMMARY;
use coach_core::models::WorkoutSession;

use super::{distinct_local_dates, label, local_hour, TypeTally};

/// Local hours counted as "morning": [5, 12).
const MORNING_HOURS: std::ops::Range<u32> = 5..12;
/// Share of morning sessions above which a morning pattern is reported.
const MORNING_SHARE: f64 = 0.6;
/// Share of distinct days per session above which consistency is reported.
const CONSISTENCY_SHARE: f64 = 0.8;

/// Digest of workout sessions: count, dominant type, mean duration, morning
/// habit, and whether sessions are spread over separate days.
pub fn summarize_workouts(workouts: &[WorkoutSession]) -> String {
    if workouts.is_empty() {
        return NO_WORKOUTS_SUMMARY.to_string();
    }

    let total = workouts.len();
    let mut tally = TypeTally::default();
    let mut total_duration = 0.0;
    let mut morning = 0usize;

    for workout in workouts {
        tally.record(label(&workout.workout_type, "general"));
        total_duration += workout.duration_minutes.unwrap_or(0.0);
        if MORNING_HOURS.contains(&local_hour(workout.completed_at)) {
            morning += 1;
        }
    }

    let avg_duration = (total_duration / total as f64).round() as i64;
    let (main_type, main_count) = tally.dominant().unwrap_or(("general", 0));

    let mut parts = vec![
        format!("Completed {total} workouts in the past period."),
        format!("Primary focus: {main_type} ({main_count} sessions)."),
        format!("Average duration: {avg_duration} minutes."),
    ];

    if morning as f64 > total as f64 * MORNING_SHARE {
        parts.push("Consistent morning workout pattern.".to_string());
    }

    let days = distinct_local_dates(workouts.iter().map(|w| w.completed_at));
    if days as f64 > total as f64 * CONSISTENCY_SHARE {
        parts.push("Good consistency with regular training.".to_string());
    }

    parts.join(" ")
}
