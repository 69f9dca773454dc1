use coach_core::constants::NO_ACTIVITIES_SUMMARY;
use coach_core::models::Activity;

use super::{label, TypeTally};

/// Digest of activities: count, dominant type, and whichever of distance,
/// time and calories are non-zero.
pub fn summarize_activities(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return NO_ACTIVITIES_SUMMARY.to_string();
    }

    let mut tally = TypeTally::default();
    let mut distance_km = 0.0;
    let mut duration_minutes = 0.0;
    let mut calories = 0.0;

    for activity in activities {
        tally.record(label(&activity.activity_type, "other"));
        distance_km += activity.distance_km.unwrap_or(0.0);
        duration_minutes += activity.duration_minutes.unwrap_or(0.0);
        calories += activity.calories_burned.unwrap_or(0.0);
    }

    let (main_type, main_count) = tally.dominant().unwrap_or(("other", 0));
    let mut parts = vec![
        format!("Logged {} activities.", activities.len()),
        format!("Primary activity: {main_type} ({main_count} times)."),
    ];

    if distance_km > 0.0 {
        parts.push(format!("Total distance: {distance_km:.1}km."));
    }
    if duration_minutes > 0.0 {
        parts.push(format!(
            "Total time: {} hours.",
            (duration_minutes / 60.0).round() as i64
        ));
    }
    if calories > 0.0 {
        parts.push(format!("Calories burned: {}.", calories.round() as i64));
    }

    parts.join(" ")
}
