//! Run counts, truncation and fallback rates, token efficiency, per-stage counts.

use std::collections::BTreeMap;

use coach_core::models::CompressionReport;
use serde::{Deserialize, Serialize};

/// Tracks compression behaviour across calls. Owned by the host, fed with reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompressionMetrics {
    pub runs: u64,
    /// Runs where at least one truncation stage applied.
    pub truncated_runs: u64,
    pub fallback_runs: u64,
    /// Runs whose final estimate still exceeded the budget.
    pub over_budget_runs: u64,
    pub total_estimated_tokens: u64,
    pub total_budgeted_tokens: u64,
    pub total_elapsed_micros: u64,
    /// Stage name to number of runs it applied in.
    pub stage_counts: BTreeMap<String, u64>,
}

impl CompressionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one compression report.
    pub fn record(&mut self, report: &CompressionReport) {
        self.runs += 1;
        if report.compressed() {
            self.truncated_runs += 1;
        }
        if report.used_fallback() {
            self.fallback_runs += 1;
        }
        if !report.within_budget() {
            self.over_budget_runs += 1;
        }
        self.total_estimated_tokens += report.estimated_tokens as u64;
        self.total_budgeted_tokens += report.max_tokens as u64;
        self.total_elapsed_micros += report.elapsed_micros;
        for stage in &report.stages {
            *self.stage_counts.entry(stage.as_str().to_string()).or_default() += 1;
        }
    }

    /// Fraction of runs that needed the minimal fallback.
    pub fn fallback_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.fallback_runs as f64 / self.runs as f64
    }

    /// Overall token efficiency (estimated / budgeted).
    pub fn token_efficiency(&self) -> f64 {
        if self.total_budgeted_tokens == 0 {
            return 0.0;
        }
        self.total_estimated_tokens as f64 / self.total_budgeted_tokens as f64
    }

    pub fn mean_elapsed_micros(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_elapsed_micros as f64 / self.runs as f64
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
