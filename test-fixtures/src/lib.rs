//! Deterministic builders and JSON fixture loading for coach tests.
//!
//! All timestamps are derived from a caller-supplied local "now" so tests
//! that filter by calendar day stay stable. Builders panic on impossible
//! inputs; they are only ever used from tests and benches.

use std::path::PathBuf;

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use coach_core::models::{
    Activity, FactType, Goal, InjuryConstraint, InjurySeverity, Intensity, LongTermTrends, Meal,
    MemoryFact, NutritionPreferences, PreferenceProfile, PreferredTime, RawContext,
    TrainingEnvironment, TrendData, TrendDirection, UserConstraints, UserProfile,
    WorkoutPreferences, WorkoutSession,
};
use serde::de::DeserializeOwned;

const WORKOUT_TYPES: [&str; 3] = ["strength", "cardio", "yoga"];
const MEAL_TYPES: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];
const ACTIVITY_TYPES: [&str; 3] = ["running", "cycling", "walking"];

// ── Clock helpers ───────────────────────────────────────────────────────────

/// Mid-January noon: no DST transition nearby in any common zone.
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .expect("2025-01-15 12:00 is unambiguous")
}

/// Calendar date `days` before `now` (local).
pub fn days_before(now: DateTime<Local>, days: u64) -> NaiveDate {
    now.date_naive()
        .checked_sub_days(Days::new(days))
        .expect("date in range")
}

/// UTC instant of `hour:minute` local time on `date`.
pub fn local_at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let naive = date.and_hms_opt(hour, minute, 0).expect("valid wall time");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("local time exists")
        .with_timezone(&Utc)
}

// ── Records ─────────────────────────────────────────────────────────────────

pub fn workout(kind: &str, completed_at: DateTime<Utc>, duration_minutes: f64) -> WorkoutSession {
    WorkoutSession {
        id: format!("workout-{}", completed_at.timestamp()),
        workout_type: Some(kind.to_string()),
        completed_at,
        duration_minutes: Some(duration_minutes),
        calories_burned: Some(duration_minutes * 8.0),
        exercises: Vec::new(),
    }
}

/// One workout per day going back from `now`, at 07:00 two days out of three
/// and 18:00 otherwise. Types cycle strength/cardio/yoga.
pub fn workouts(count: usize, now: DateTime<Local>) -> Vec<WorkoutSession> {
    (0..count)
        .map(|i| {
            let hour = if i % 3 == 2 { 18 } else { 7 };
            let at = local_at(days_before(now, i as u64 + 1), hour, 0);
            workout(WORKOUT_TYPES[i % WORKOUT_TYPES.len()], at, 45.0)
        })
        .collect()
}

pub fn meal(kind: &str, logged_at: DateTime<Utc>, calories: f64, protein_g: f64) -> Meal {
    Meal {
        id: format!("meal-{}", logged_at.timestamp()),
        meal_type: Some(kind.to_string()),
        name: Some(format!("{kind} plate")),
        logged_at,
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbs_g: Some(calories / 8.0),
        fat_g: Some(calories / 30.0),
    }
}

/// `per_day` meals on each of the `days` days ending today (local).
pub fn meals(days: u64, per_day: usize, now: DateTime<Local>) -> Vec<Meal> {
    let mut out = Vec::new();
    for day in 0..days {
        let date = days_before(now, day);
        for slot in 0..per_day {
            let at = local_at(date, 7 + (slot as u32 * 4).min(16), 30);
            out.push(meal(MEAL_TYPES[slot % MEAL_TYPES.len()], at, 500.0, 30.0));
        }
    }
    out
}

pub fn activity(
    kind: &str,
    logged_at: DateTime<Utc>,
    distance_km: Option<f64>,
    duration_minutes: Option<f64>,
    calories_burned: Option<f64>,
) -> Activity {
    Activity {
        id: format!("activity-{}", logged_at.timestamp()),
        activity_type: Some(kind.to_string()),
        logged_at,
        distance_km,
        duration_minutes,
        calories_burned,
    }
}

/// One activity per day going back from `now`; types cycle running/cycling/walking.
pub fn activities(count: usize, now: DateTime<Local>) -> Vec<Activity> {
    (0..count)
        .map(|i| {
            let at = local_at(days_before(now, i as u64 + 1), 17, 0);
            activity(
                ACTIVITY_TYPES[i % ACTIVITY_TYPES.len()],
                at,
                Some(5.0),
                Some(30.0),
                Some(250.0),
            )
        })
        .collect()
}

pub fn goal(title: &str, is_active: Option<bool>) -> Goal {
    Goal {
        id: format!("goal-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        is_active,
        ..Goal::default()
    }
}

/// `active` goals with the flag absent, then `inactive` goals flagged false.
pub fn goals(active: usize, inactive: usize) -> Vec<Goal> {
    let current = (0..active).map(|i| goal(&format!("Active goal {i}"), None));
    let retired = (0..inactive).map(|i| goal(&format!("Retired goal {i}"), Some(false)));
    current.chain(retired).collect()
}

// ── Facts ───────────────────────────────────────────────────────────────────

pub fn fact(
    fact_type: FactType,
    content: &str,
    confidence: f64,
    created_at: DateTime<Utc>,
) -> MemoryFact {
    MemoryFact::new(fact_type, content, confidence, created_at)
}

/// `constraints` constraint facts at 0.9, then `preferences` preference facts
/// with confidence stepping down from 0.95 and age stepping back one day each,
/// so higher confidence is always also newer.
pub fn facts(constraints: usize, preferences: usize, now: DateTime<Local>) -> Vec<MemoryFact> {
    let mut out = Vec::with_capacity(constraints + preferences);
    for i in 0..constraints {
        let at = local_at(days_before(now, 30 + i as u64), 9, 0);
        out.push(
            fact(FactType::Constraint, &format!("Constraint {i}: avoid heavy overhead load"), 0.9, at)
                .with_id(format!("constraint-{i}")),
        );
    }
    let step = if preferences > 1 {
        0.35 / (preferences - 1) as f64
    } else {
        0.0
    };
    for i in 0..preferences {
        let at = local_at(days_before(now, 1 + i as u64), 9, 0);
        out.push(
            fact(FactType::Preference, &format!("Preference {i}"), 0.95 - step * i as f64, at)
                .with_id(format!("preference-{i}")),
        );
    }
    out
}

// ── Profile, preferences, trends ────────────────────────────────────────────

pub fn profile() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: Some("Sam".to_string()),
        primary_goal: Some("build strength".to_string()),
        about: Some("Office worker training before work".to_string()),
        experience_level: Some("intermediate".to_string()),
        created_at: None,
    }
}

pub fn preference_profile() -> PreferenceProfile {
    PreferenceProfile {
        user_id: "user-1".to_string(),
        workout_preferences: WorkoutPreferences {
            preferred_time: Some(PreferredTime::Morning),
            preferred_days: vec!["monday".into(), "wednesday".into(), "friday".into()],
            preferred_duration: Some(45),
            preferred_intensity: Some(Intensity::Moderate),
            favorite_exercises: vec!["squat".into(), "deadlift".into()],
            preferred_environment: Some(TrainingEnvironment::Gym),
            ..WorkoutPreferences::default()
        },
        nutrition_preferences: NutritionPreferences {
            dietary_restrictions: vec!["vegetarian".into()],
            allergies: vec!["peanuts".into()],
            ..NutritionPreferences::default()
        },
        constraints: UserConstraints {
            injuries: vec![InjuryConstraint {
                body_part: "left knee".into(),
                severity: InjurySeverity::Moderate,
                restrictions: vec!["no jumping".into()],
                date_reported: None,
                is_healed: Some(false),
            }],
            ..UserConstraints::default()
        },
        motivators: vec!["progress photos".into()],
        ..PreferenceProfile::default()
    }
}

pub fn trends() -> LongTermTrends {
    LongTermTrends {
        workout_frequency_trend: TrendData {
            direction: TrendDirection::Increasing,
            change_rate: 12.5,
            confidence: 0.8,
            period_days: 30,
        },
        activity_consistency: 0.75,
        ..LongTermTrends::default()
    }
}

/// A realistic, deliberately oversized context: two months of workouts, two
/// weeks of meals, a month of activities, mixed goals and 46 facts.
pub fn large_context(now: DateTime<Local>) -> RawContext {
    let mut memory_facts = facts(6, 40, now);
    for f in memory_facts.iter_mut().skip(6).step_by(3) {
        f.content.push_str(" with a long explanatory note about timing, equipment and recovery");
    }
    RawContext {
        profile: profile(),
        goals: goals(4, 2),
        recent_workouts: workouts(60, now),
        recent_meals: meals(14, 4, now),
        recent_activities: activities(30, now),
        memory_facts,
        preference_profile: Some(preference_profile()),
        long_term_trends: trends(),
        ..RawContext::default()
    }
}

// ── JSON fixtures ───────────────────────────────────────────────────────────

/// Directory holding the JSON fixtures.
fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path of a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    data_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}
