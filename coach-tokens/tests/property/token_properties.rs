use coach_core::traits::ITokenEstimator;
use coach_tokens::{HeuristicEstimator, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn heuristic_is_ceiling_of_quarter_bytes(s in ".{0,300}") {
        let estimator = HeuristicEstimator::default();
        let tokens = estimator.estimate(&s);
        prop_assert!(tokens * 4 >= s.len());
        prop_assert!(tokens * 4 < s.len() + 4);
    }

    #[test]
    fn heuristic_is_monotonic_under_append(a in ".{0,100}", b in ".{0,100}") {
        let estimator = HeuristicEstimator::default();
        let combined = format!("{}{}", a, b);
        prop_assert!(estimator.estimate(&combined) >= estimator.estimate(&a));
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::with_default_capacity().unwrap();
        prop_assert_eq!(counter.count(&s), counter.count_cached(&s));
    }
}
