//! # coach-tokens
//!
//! Token estimation for budget checks.
//! [`HeuristicEstimator`] is the default: `ceil(bytes / chars_per_token)`, a known-imprecise
//! approximation. [`TokenCounter`] counts exactly with `tiktoken-rs` (`cl100k_base`) and
//! caches results per content hash. Both implement `ITokenEstimator`.

pub mod budget;
pub mod counter;
pub mod estimator;

pub use budget::TokenBudget;
pub use counter::TokenCounter;
pub use estimator::HeuristicEstimator;
