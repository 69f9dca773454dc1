//! Preference profile. Every nested category is a concrete struct with
//! all-optional fields and an empty default, so a missing category in the
//! source data becomes an empty object rather than a null.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PreferredTime {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEnvironment {
    Home,
    Gym,
    Outdoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrackingDetail {
    Minimal,
    Moderate,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Encouraging,
    Direct,
    Gentle,
    ToughLove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Concise,
    Moderate,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MotivationStyle {
    PositiveReinforcement,
    ChallengeBased,
    ProgressFocused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFrequency {
    Daily,
    Weekly,
    AsNeeded,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<PreferredTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred_days: Vec<String>,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_intensity: Option<Intensity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub favorite_exercises: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub avoided_exercises: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_environment: Option<TrainingEnvironment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equipment_available: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct NutritionPreferences {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
    /// Meal name to clock time, e.g. `breakfast -> 7:00`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub preferred_meal_times: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disliked_foods: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub favorite_healthy_foods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_prep_preference: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_detail: Option<TrackingDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CommunicationStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_level: Option<DetailLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation_style: Option<MotivationStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_frequency: Option<ReminderFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InjuryConstraint {
    pub body_part: String,
    pub severity: InjurySeverity,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_reported: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_healed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimeConstraint {
    pub day_of_week: String,
    /// Ranges such as `9-17`.
    #[serde(default)]
    pub unavailable_hours: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct UserConstraints {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub injuries: Vec<InjuryConstraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub medical_conditions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time_constraints: Vec<TimeConstraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equipment_limitations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mobility_restrictions: Vec<String>,
}

/// Everything known about how the user likes to train, eat and be coached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub user_id: String,
    pub workout_preferences: WorkoutPreferences,
    pub nutrition_preferences: NutritionPreferences,
    pub communication_style: CommunicationStyle,
    pub constraints: UserConstraints,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub motivators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The flattened preference subset carried into the compressed context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyPreferences {
    pub workout_preferences: WorkoutPreferences,
    pub nutrition_preferences: NutritionPreferences,
    pub constraints: UserConstraints,
}

impl From<&PreferenceProfile> for KeyPreferences {
    fn from(profile: &PreferenceProfile) -> Self {
        Self {
            workout_preferences: profile.workout_preferences.clone(),
            nutrition_preferences: profile.nutrition_preferences.clone(),
            constraints: profile.constraints.clone(),
        }
    }
}
