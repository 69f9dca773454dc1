use coach_core::constants::NO_MEALS_SUMMARY;
use coach_core::models::Meal;

use super::{distinct_local_dates, label, TypeTally};

/// Days of logging beyond which tracking can count as consistent.
const CONSISTENT_MIN_DAYS: usize = 5;
const CONSISTENT_MEALS_PER_DAY: f64 = 3.0;

/// Digest of logged meals: count, days covered, per-day calorie and protein
/// averages, meal-type distribution, and tracking regularity.
pub fn summarize_nutrition(meals: &[Meal]) -> String {
    if meals.is_empty() {
        return NO_MEALS_SUMMARY.to_string();
    }

    let mut tally = TypeTally::default();
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;

    for meal in meals {
        calories += meal.calories.unwrap_or(0.0);
        protein += meal.protein_g.unwrap_or(0.0);
        carbs += meal.carbs_g.unwrap_or(0.0);
        fat += meal.fat_g.unwrap_or(0.0);
        tally.record(label(&meal.meal_type, "meal"));
    }
    tracing::trace!(calories, protein, carbs, fat, "nutrition totals");

    let total = meals.len();
    let days = distinct_local_dates(meals.iter().map(|m| m.logged_at)).max(1);
    let avg_calories = (calories / days as f64).round() as i64;
    let avg_protein = (protein / days as f64).round() as i64;

    let mut parts = vec![
        format!("Tracked {total} meals over {days} days."),
        format!("Daily averages: {avg_calories} calories, {avg_protein}g protein."),
        format!("Meal distribution: {}.", tally.breakdown()),
    ];

    if days > CONSISTENT_MIN_DAYS && total as f64 / days as f64 >= CONSISTENT_MEALS_PER_DAY {
        parts.push("Consistent meal tracking.".to_string());
    }

    parts.join(" ")
}
