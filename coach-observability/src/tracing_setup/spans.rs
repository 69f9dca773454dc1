//! Span definitions for compression operations.

/// Create a compression span.
#[macro_export]
macro_rules! compression_span {
    ($max_tokens:expr, $has_query:expr) => {
        tracing::info_span!(
            "coach.compression",
            max_tokens = $max_tokens,
            has_query = $has_query
        )
    };
}

/// Create a truncation span.
#[macro_export]
macro_rules! truncation_span {
    ($estimated:expr, $max_tokens:expr) => {
        tracing::debug_span!(
            "coach.truncation",
            estimated = $estimated,
            max_tokens = $max_tokens
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const COMPRESSION: &str = "coach.compression";
    pub const TRUNCATION: &str = "coach.truncation";
}
