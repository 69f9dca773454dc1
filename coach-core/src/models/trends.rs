use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    #[default]
    Stable,
    Decreasing,
}

/// Direction and magnitude of a trend over a window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendData {
    pub direction: TrendDirection,
    /// Percentage change over the period.
    pub change_rate: f64,
    pub confidence: f64,
    pub period_days: u32,
}

/// Derived long-term indicators. Passed through compression untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct LongTermTrends {
    pub workout_frequency_trend: TrendData,
    pub strength_progress_trend: TrendData,
    pub nutrition_adherence_trend: TrendData,
    /// Ratio in [0, 1].
    pub activity_consistency: f64,
}
