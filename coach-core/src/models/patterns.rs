use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recurring workout slot computed upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutPattern {
    /// 0 = Sunday.
    pub day_of_week: u8,
    pub hour_of_day: u8,
    pub frequency: f64,
    pub avg_duration: f64,
    pub workout_types: Vec<String>,
}

/// Per-meal-type nutrition averages computed upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct NutritionPattern {
    pub meal_type: String,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub meal_count: u32,
    pub time_preferences: Vec<String>,
}
