/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Characters per token assumed by the heuristic estimator.
pub const CHARS_PER_TOKEN: usize = 4;

/// Budget used when a caller does not supply one.
pub const DEFAULT_MAX_TOKENS: usize = 100_000;

/// Characters reserved at the end of a last-resort serialized cut.
pub const SERIALIZED_CUT_MARGIN: usize = 10;

/// Marker appended to a summary cut down by truncation.
pub const ELLIPSIS: &str = "...";

/// Closing sequence appended after a serialized cut before re-parsing.
pub const SERIALIZED_CUT_CLOSER: &str = "\"}}}";

/// Sentinel summaries when no records of a kind exist.
pub const NO_WORKOUTS_SUMMARY: &str = "No recent workouts recorded.";
pub const NO_MEALS_SUMMARY: &str = "No recent meals logged.";
pub const NO_ACTIVITIES_SUMMARY: &str = "No recent activities recorded.";

/// Generic summaries used by the minimal fallback object.
pub const FALLBACK_WORKOUT_SUMMARY: &str = "Recent workouts tracked";
pub const FALLBACK_NUTRITION_SUMMARY: &str = "Meals logged";
pub const FALLBACK_ACTIVITY_SUMMARY: &str = "Activities recorded";
