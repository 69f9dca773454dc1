use coach_core::config::ObservabilityConfig;
use coach_core::models::{CompressionReport, TruncationStage};
use coach_observability::tracing_setup::spans::names;
use coach_observability::{events, init_tracing_with_config, init_tracing_with_filter, CompressionMetrics};

fn report(stages: Vec<TruncationStage>, estimated: usize, max: usize) -> CompressionReport {
    CompressionReport {
        original_tokens: estimated * 3,
        estimated_tokens: estimated,
        max_tokens: max,
        stages,
        elapsed_micros: 100,
    }
}

#[test]
fn metrics_start_empty() {
    let metrics = CompressionMetrics::new();
    assert_eq!(metrics.runs, 0);
    assert_eq!(metrics.fallback_rate(), 0.0);
    assert_eq!(metrics.token_efficiency(), 0.0);
    assert_eq!(metrics.mean_elapsed_micros(), 0.0);
}

#[test]
fn metrics_count_truncations_and_fallbacks() {
    let mut metrics = CompressionMetrics::new();
    metrics.record(&report(vec![], 500, 1000));
    metrics.record(&report(
        vec![TruncationStage::SummariesShortened, TruncationStage::WorkoutsCapped],
        900,
        1000,
    ));
    metrics.record(&report(
        vec![
            TruncationStage::SummariesShortened,
            TruncationStage::WorkoutsCapped,
            TruncationStage::FactsCapped,
            TruncationStage::MinimalFallback,
        ],
        60,
        50,
    ));

    assert_eq!(metrics.runs, 3);
    assert_eq!(metrics.truncated_runs, 2);
    assert_eq!(metrics.fallback_runs, 1);
    assert_eq!(metrics.over_budget_runs, 1);
    assert_eq!(metrics.stage_counts["summaries_shortened"], 2);
    assert_eq!(metrics.stage_counts["minimal_fallback"], 1);
    assert!((metrics.fallback_rate() - 1.0 / 3.0).abs() < 1e-9);
    assert!((metrics.token_efficiency() - 1460.0 / 2050.0).abs() < 1e-9);
    assert_eq!(metrics.mean_elapsed_micros(), 100.0);
}

#[test]
fn metrics_reset_clears_everything() {
    let mut metrics = CompressionMetrics::new();
    metrics.record(&report(vec![TruncationStage::FactsCapped], 10, 20));
    metrics.reset();
    assert_eq!(metrics.runs, 0);
    assert!(metrics.stage_counts.is_empty());
}

#[test]
fn metrics_serialize() {
    let mut metrics = CompressionMetrics::new();
    metrics.record(&report(vec![TruncationStage::SerializedCut], 10, 20));
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["runs"], 1);
    assert_eq!(json["stage_counts"]["serialized_cut"], 1);
}

#[test]
fn events_emit_without_subscriber() {
    let r = report(vec![TruncationStage::MinimalFallback], 60, 50);
    events::compression_completed(&r);
    events::truncation_stage_applied(TruncationStage::WorkoutsCapped, 120);
    events::fallback_triggered(60, 50, "serialized cut did not parse");
}

#[test]
fn span_names_are_namespaced() {
    assert_eq!(names::COMPRESSION, "coach.compression");
    assert_eq!(names::TRUNCATION, "coach.truncation");
    let span = coach_observability::compression_span!(4000usize, false);
    let _guard = span.enter();
}

#[test]
fn global_subscriber_installs_once() {
    let first = init_tracing_with_filter("debug");
    let second = init_tracing_with_config(&ObservabilityConfig::default());
    // Only one global subscriber can exist per process.
    assert!(first);
    assert!(!second);
}
