use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Compression subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Token budget used when the caller does not pass one.
    pub default_max_tokens: usize,
    /// Divisor of the heuristic estimator, also used to size the last-resort cut.
    pub chars_per_token: usize,
    /// Most recent workouts kept by the prioritizer.
    pub recent_workout_limit: usize,
    /// Facts below this confidence are discarded before ranking.
    pub min_fact_confidence: f64,
    /// Cap on non-constraint facts after ranking.
    pub max_ranked_facts: usize,
    /// Summary length (chars) above which truncation cuts a summary.
    pub summary_char_limit: usize,
    /// Workout cap applied by truncation.
    pub truncated_workout_limit: usize,
    /// Fact cap applied by truncation.
    pub truncated_fact_limit: usize,
    /// Goals kept by the minimal fallback.
    pub fallback_goal_limit: usize,
    /// Meals kept by the minimal fallback.
    pub fallback_meal_limit: usize,
    /// Facts kept by the minimal fallback.
    pub fallback_fact_limit: usize,
    /// Keep every constraint when truncation caps the fact list.
    pub preserve_constraints_on_truncation: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            default_max_tokens: defaults::DEFAULT_MAX_TOKENS,
            chars_per_token: defaults::DEFAULT_CHARS_PER_TOKEN,
            recent_workout_limit: defaults::DEFAULT_RECENT_WORKOUT_LIMIT,
            min_fact_confidence: defaults::DEFAULT_MIN_FACT_CONFIDENCE,
            max_ranked_facts: defaults::DEFAULT_MAX_RANKED_FACTS,
            summary_char_limit: defaults::DEFAULT_SUMMARY_CHAR_LIMIT,
            truncated_workout_limit: defaults::DEFAULT_TRUNCATED_WORKOUT_LIMIT,
            truncated_fact_limit: defaults::DEFAULT_TRUNCATED_FACT_LIMIT,
            fallback_goal_limit: defaults::DEFAULT_FALLBACK_GOAL_LIMIT,
            fallback_meal_limit: defaults::DEFAULT_FALLBACK_MEAL_LIMIT,
            fallback_fact_limit: defaults::DEFAULT_FALLBACK_FACT_LIMIT,
            preserve_constraints_on_truncation: defaults::DEFAULT_PRESERVE_CONSTRAINTS,
        }
    }
}

impl CompressionConfig {
    /// Reject values that would make the pipeline meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "compression.default_max_tokens".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.chars_per_token == 0 {
            return Err(ConfigError::InvalidValue {
                field: "compression.chars_per_token".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.min_fact_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "compression.min_fact_confidence".into(),
                reason: format!("{} is outside [0, 1]", self.min_fact_confidence),
            });
        }
        Ok(())
    }
}
