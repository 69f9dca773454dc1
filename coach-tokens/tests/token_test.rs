use coach_core::traits::ITokenEstimator;
use coach_tokens::{HeuristicEstimator, TokenBudget, TokenCounter};

#[test]
fn heuristic_empty_string_is_zero() {
    let estimator = HeuristicEstimator::default();
    assert_eq!(estimator.estimate(""), 0);
}

#[test]
fn heuristic_rounds_up() {
    let estimator = HeuristicEstimator::default();
    assert_eq!(estimator.estimate("abcd"), 1);
    assert_eq!(estimator.estimate("abcde"), 2);
    assert_eq!(estimator.estimate(&"x".repeat(400)), 100);
}

#[test]
fn heuristic_counts_utf8_bytes() {
    let estimator = HeuristicEstimator::default();
    // Four 3-byte characters = 12 bytes = 3 tokens.
    assert_eq!(estimator.estimate("日本語話"), 3);
}

#[test]
fn heuristic_respects_custom_divisor() {
    let estimator = HeuristicEstimator::new(2);
    assert_eq!(estimator.chars_per_token(), 2);
    assert_eq!(estimator.estimate("abcde"), 3);
}

#[test]
#[should_panic(expected = "chars_per_token must be greater than zero")]
fn heuristic_rejects_zero_divisor() {
    let _ = HeuristicEstimator::new(0);
}

#[test]
fn counter_empty_string_is_zero() {
    let counter = TokenCounter::with_default_capacity().unwrap();
    assert_eq!(counter.count(""), 0);
}

#[test]
fn counter_simple_text() {
    let counter = TokenCounter::with_default_capacity().unwrap();
    let count = counter.count("hello world");
    assert!(count > 0, "non-empty text should have >0 tokens");
    assert!(count < 10, "hello world should be a few tokens, got {}", count);
}

#[test]
fn counter_cached_equals_uncached() {
    let counter = TokenCounter::with_default_capacity().unwrap();
    let text = "Completed 12 workouts in the past period.";
    assert_eq!(counter.count(text), counter.count_cached(text));
    assert_eq!(counter.count_cached(text), counter.estimate(text));
}

#[test]
fn counter_is_usable_as_estimator_object() {
    let counter = TokenCounter::with_default_capacity().unwrap();
    let estimator: &dyn ITokenEstimator = &counter;
    assert!(estimator.fits("Primary focus: strength (8 sessions).", 100));
}

#[test]
fn budget_fits_and_overflow() {
    let estimator = HeuristicEstimator::default();
    let budget = TokenBudget::new(&estimator);
    let text = "a".repeat(40); // 10 tokens
    assert!(budget.fits(&text, 10));
    assert!(!budget.fits(&text, 9));
    assert_eq!(budget.overflow(&text, 9), 1);
    assert_eq!(budget.overflow(&text, 100), 0);
}

#[test]
fn budget_remaining_saturates_at_zero() {
    assert_eq!(TokenBudget::remaining(100, 50), 50);
    assert_eq!(TokenBudget::remaining(50, 100), 0);
    assert_eq!(TokenBudget::remaining(0, 0), 0);
}
