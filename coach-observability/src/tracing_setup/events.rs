//! Structured log events for compression.
//!
//! Each function emits a `tracing` event with structured fields.

use coach_core::models::{CompressionReport, TruncationStage};

/// Log a finished compression.
pub fn compression_completed(report: &CompressionReport) {
    tracing::info!(
        event = "compression_completed",
        original_tokens = report.original_tokens,
        estimated_tokens = report.estimated_tokens,
        max_tokens = report.max_tokens,
        stages = report.stages.len(),
        elapsed_micros = report.elapsed_micros,
        "compression completed"
    );
}

/// Log one truncation stage and the estimate after it.
pub fn truncation_stage_applied(stage: TruncationStage, estimated_tokens: usize) {
    tracing::debug!(
        event = "truncation_stage_applied",
        stage = stage.as_str(),
        estimated_tokens = estimated_tokens,
        "truncation stage applied"
    );
}

/// Log that the minimal fallback object replaced the candidate.
pub fn fallback_triggered(estimated_tokens: usize, max_tokens: usize, reason: &str) {
    tracing::warn!(
        event = "fallback_triggered",
        estimated_tokens = estimated_tokens,
        max_tokens = max_tokens,
        reason = %reason,
        "minimal fallback context used"
    );
}
