use chrono::{DateTime, Duration, Utc};
use coach_compression::ContextCompressor;
use coach_core::models::{CompressionRequest, FactType, Goal, MemoryFact, RawContext};
use coach_core::traits::IContextCompressor;
use proptest::prelude::*;
use test_fixtures::{fixed_now, goal, large_context};

fn base_time() -> DateTime<Utc> {
    fixed_now().with_timezone(&Utc)
}

fn arb_fact_type() -> impl Strategy<Value = FactType> {
    prop_oneof![
        Just(FactType::Preference),
        Just(FactType::Constraint),
        Just(FactType::Pattern),
        Just(FactType::Event),
        Just(FactType::Routine),
    ]
}

fn arb_fact() -> impl Strategy<Value = MemoryFact> {
    (arb_fact_type(), "[a-z ]{1,40}", 0.0f64..=1.0, 0i64..500).prop_map(
        |(fact_type, content, confidence, hours_ago)| {
            MemoryFact::new(
                fact_type,
                content,
                confidence,
                base_time() - Duration::hours(hours_ago),
            )
        },
    )
}

fn arb_goal() -> impl Strategy<Value = Goal> {
    ("[A-Za-z ]{1,20}", prop::option::of(any::<bool>()))
        .prop_map(|(title, is_active)| goal(&title, is_active))
}

fn arb_query() -> impl Strategy<Value = Option<String>> {
    prop::option::of("(nutrition|workout|diet|gym|morning|protein|[a-z]{1,8})( [a-z]{1,8}){0,3}")
}

proptest! {
    #[test]
    fn every_constraint_survives_selection(
        pool in prop::collection::vec(arb_fact(), 0..60),
        query in arb_query(),
    ) {
        let selected = ContextCompressor::new().select_relevant_facts(&pool, query.as_deref());

        let constraints: Vec<&MemoryFact> = pool.iter().filter(|f| f.is_constraint()).collect();
        prop_assert!(selected.len() <= constraints.len() + 15);
        for (i, constraint) in constraints.iter().enumerate() {
            prop_assert_eq!(&selected[i], *constraint);
        }
        prop_assert!(selected[constraints.len()..]
            .iter()
            .all(|f| !f.is_constraint() && f.confidence.value() >= 0.5));
    }

    #[test]
    fn retired_goals_never_reach_the_output(goals in prop::collection::vec(arb_goal(), 0..20)) {
        let context = RawContext { goals, ..RawContext::default() };
        let compressor = ContextCompressor::new();

        let view = compressor.prioritize_context_at(&context, fixed_now());
        prop_assert!(view.current_goals.iter().all(|g| g.is_active != Some(false)));

        let expected = context.goals.iter().filter(|g| g.is_current()).count();
        prop_assert_eq!(view.current_goals.len(), expected);
    }

    #[test]
    fn output_fits_budget_unless_fallback(budget in 1usize..6_000) {
        let now = fixed_now();
        let context = large_context(now);
        let compressor = ContextCompressor::new();

        let outcome = compressor.compress_with_report_at(&context, &CompressionRequest::new(budget), now);

        prop_assert_eq!(outcome.report.estimated_tokens, compressor.estimate(&outcome.context));
        prop_assert!(outcome.report.within_budget() || outcome.report.used_fallback());
        prop_assert!(outcome.context.recent_workouts.len() <= 10);
        if outcome.report.compressed() {
            prop_assert!(outcome.context.recent_workouts.len() <= 5);
            prop_assert!(outcome.context.workout_summary.chars().count() <= 203);
        }
    }

    #[test]
    fn compression_is_repeatable(budget in 1usize..4_000, query in arb_query()) {
        let now = fixed_now();
        let context = large_context(now);
        let compressor = ContextCompressor::new();
        let request = match query {
            Some(q) => CompressionRequest::new(budget).with_query(q),
            None => CompressionRequest::new(budget),
        };

        let first = compressor.compress_with_report_at(&context, &request, now).context;
        let second = compressor.compress_with_report_at(&context, &request, now).context;
        prop_assert_eq!(first, second);
    }
}
