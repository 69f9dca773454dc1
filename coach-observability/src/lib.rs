//! # coach-observability
//!
//! Structured tracing with span definitions, structured events for each
//! truncation stage, and aggregate compression metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::CompressionMetrics;
pub use tracing_setup::{events, init_tracing, init_tracing_with_config, init_tracing_with_filter};
