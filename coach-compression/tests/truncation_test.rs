//! Truncation order, stage bookkeeping and the constraint-preserving fact cap.

use coach_compression::truncation::{serialize, stages};
use coach_compression::Truncator;
use coach_core::config::CompressionConfig;
use coach_core::models::{CompressedContext, FactType, TruncationStage};
use coach_core::traits::ITokenEstimator;
use coach_tokens::HeuristicEstimator;
use test_fixtures::{days_before, fact, facts, fixed_now, local_at, workouts};

fn oversized_candidate() -> CompressedContext {
    let now = fixed_now();
    CompressedContext {
        workout_summary: "w".repeat(1_000),
        nutrition_summary: "n".repeat(1_000),
        activity_summary: "short".to_string(),
        recent_workouts: workouts(10, now),
        relevant_facts: facts(2, 18, now),
        ..CompressedContext::default()
    }
}

#[test]
fn fitting_candidate_is_returned_unchanged() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();
    let candidate = oversized_candidate();

    let truncated = Truncator::new(&estimator, &config).truncate_to_token_limit(candidate.clone(), 100_000);

    assert_eq!(truncated.context, candidate);
    assert!(truncated.stages.is_empty());
    assert_eq!(truncated.estimated_tokens, estimator.estimate(&serialize(&candidate)));
}

/// Heuristic sizes with a fit rule that tolerates twice the budget.
struct SlackEstimator(HeuristicEstimator);

impl ITokenEstimator for SlackEstimator {
    fn estimate(&self, text: &str) -> usize {
        self.0.estimate(text)
    }

    fn fits(&self, text: &str, budget: usize) -> bool {
        self.estimate(text) <= budget * 2
    }
}

#[test]
fn budget_exactly_at_the_estimate_fits() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();
    let candidate = oversized_candidate();
    let exact = estimator.estimate(&serialize(&candidate));

    let truncated = Truncator::new(&estimator, &config).truncate_to_token_limit(candidate.clone(), exact);

    assert!(truncated.stages.is_empty());
    assert_eq!(truncated.context, candidate);
}

#[test]
fn fit_check_defers_to_the_estimator() {
    let estimator = SlackEstimator(HeuristicEstimator::default());
    let config = CompressionConfig::default();
    let candidate = oversized_candidate();
    let size = estimator.estimate(&serialize(&candidate));
    let half = size.div_ceil(2);

    let truncated = Truncator::new(&estimator, &config).truncate_to_token_limit(candidate.clone(), half);

    assert!(truncated.stages.is_empty());
    assert_eq!(truncated.context, candidate);
    assert_eq!(truncated.original_tokens, size);
}

#[test]
fn ordered_stages_are_enough_when_budget_matches_their_result() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();
    let candidate = oversized_candidate();

    let mut expected = candidate.clone();
    stages::shorten_summaries(&mut expected, 200);
    stages::cap_workouts(&mut expected, 5);
    stages::cap_facts(&mut expected, 10, true);
    let budget = estimator.estimate(&serialize(&expected));

    let truncated = Truncator::new(&estimator, &config).truncate_to_token_limit(candidate, budget);

    assert_eq!(
        truncated.stages,
        [
            TruncationStage::SummariesShortened,
            TruncationStage::WorkoutsCapped,
            TruncationStage::FactsCapped,
        ]
    );
    assert_eq!(truncated.context, expected);
    assert_eq!(truncated.estimated_tokens, budget);
    assert!(truncated.original_tokens > budget);

    let summary = &truncated.context.workout_summary;
    assert_eq!(summary.chars().count(), 203);
    assert!(summary.ends_with("..."));
    assert_eq!(truncated.context.activity_summary, "short");
    assert_eq!(truncated.context.recent_workouts.len(), 5);
    assert_eq!(truncated.context.relevant_facts.len(), 10);
}

#[test]
fn only_changing_stages_are_recorded() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();
    let candidate = CompressedContext {
        workout_summary: "w".repeat(2_000),
        ..CompressedContext::default()
    };
    let mut expected = candidate.clone();
    stages::shorten_summaries(&mut expected, 200);
    let budget = estimator.estimate(&serialize(&expected));

    let truncated = Truncator::new(&estimator, &config).truncate_to_token_limit(candidate, budget);

    assert_eq!(truncated.stages, [TruncationStage::SummariesShortened]);
}

#[test]
fn unreachable_budget_ends_in_the_minimal_object() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();

    let truncated =
        Truncator::new(&estimator, &config).truncate_to_token_limit(oversized_candidate(), 10);

    assert_eq!(truncated.stages.last(), Some(&TruncationStage::MinimalFallback));
    assert!(!truncated.stages.contains(&TruncationStage::SerializedCut));
    assert!(truncated.context.recent_workouts.is_empty());
    assert_eq!(truncated.context.relevant_facts.len(), 5);
}

#[test]
fn fact_cap_keeps_every_constraint_when_preserving() {
    let now = fixed_now();
    let at = local_at(days_before(now, 1), 9, 0);
    let mut pool = Vec::new();
    for i in 0..12 {
        pool.push(fact(FactType::Constraint, &format!("Injury {i}"), 0.9, at));
    }
    for i in 0..5 {
        pool.push(fact(FactType::Preference, &format!("Likes {i}"), 0.9, at));
    }
    let mut context = CompressedContext {
        relevant_facts: pool,
        ..CompressedContext::default()
    };

    assert!(stages::cap_facts(&mut context, 10, true));

    assert_eq!(context.relevant_facts.len(), 12);
    assert!(context.relevant_facts.iter().all(|f| f.is_constraint()));
}

#[test]
fn fact_cap_fills_remaining_room_in_order() {
    let now = fixed_now();
    let mut context = CompressedContext {
        relevant_facts: facts(3, 12, now),
        ..CompressedContext::default()
    };

    stages::cap_facts(&mut context, 10, true);

    let ids: Vec<&str> = context.relevant_facts.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids[..3], ["constraint-0", "constraint-1", "constraint-2"]);
    assert_eq!(ids[3..], ["preference-0", "preference-1", "preference-2", "preference-3",
        "preference-4", "preference-5", "preference-6"]);
}

#[test]
fn plain_fact_cap_is_a_prefix_slice() {
    let now = fixed_now();
    let at = local_at(days_before(now, 1), 9, 0);
    let mut pool: Vec<_> = (0..8)
        .map(|i| fact(FactType::Preference, &format!("Likes {i}"), 0.9, at))
        .collect();
    pool.extend((0..4).map(|i| fact(FactType::Constraint, &format!("Injury {i}"), 0.9, at)));
    let mut context = CompressedContext {
        relevant_facts: pool,
        ..CompressedContext::default()
    };

    stages::cap_facts(&mut context, 10, false);

    assert_eq!(context.relevant_facts.len(), 10);
    let kept_constraints = context.relevant_facts.iter().filter(|f| f.is_constraint()).count();
    assert_eq!(kept_constraints, 2);
}

#[test]
fn short_lists_are_left_alone() {
    let now = fixed_now();
    let mut context = CompressedContext {
        workout_summary: "fine".into(),
        recent_workouts: workouts(5, now),
        relevant_facts: facts(1, 9, now),
        ..CompressedContext::default()
    };

    assert!(!stages::shorten_summaries(&mut context, 200));
    assert!(!stages::cap_workouts(&mut context, 5));
    assert!(!stages::cap_facts(&mut context, 10, true));
}

#[test]
#[should_panic(expected = "max_tokens must be greater than zero")]
fn zero_budget_panics() {
    let estimator = HeuristicEstimator::default();
    let config = CompressionConfig::default();
    Truncator::new(&estimator, &config).truncate_to_token_limit(CompressedContext::default(), 0);
}
