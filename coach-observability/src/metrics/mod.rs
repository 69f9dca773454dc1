//! Aggregate compression metrics.

mod compression_metrics;

pub use compression_metrics::CompressionMetrics;
