// Single source of truth for all default values.

// --- Compression ---
pub const DEFAULT_MAX_TOKENS: usize = crate::constants::DEFAULT_MAX_TOKENS;
pub const DEFAULT_CHARS_PER_TOKEN: usize = crate::constants::CHARS_PER_TOKEN;
pub const DEFAULT_RECENT_WORKOUT_LIMIT: usize = 10;
pub const DEFAULT_MIN_FACT_CONFIDENCE: f64 = crate::models::Confidence::MEDIUM;
pub const DEFAULT_MAX_RANKED_FACTS: usize = 15;
pub const DEFAULT_SUMMARY_CHAR_LIMIT: usize = 200;
pub const DEFAULT_TRUNCATED_WORKOUT_LIMIT: usize = 5;
pub const DEFAULT_TRUNCATED_FACT_LIMIT: usize = 10;
pub const DEFAULT_FALLBACK_GOAL_LIMIT: usize = 2;
pub const DEFAULT_FALLBACK_MEAL_LIMIT: usize = 3;
pub const DEFAULT_FALLBACK_FACT_LIMIT: usize = 5;
pub const DEFAULT_PRESERVE_CONSTRAINTS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
