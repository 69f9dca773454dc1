use coach_core::traits::ITokenEstimator;

/// Budget checks against a pluggable estimator.
pub struct TokenBudget<'a> {
    estimator: &'a dyn ITokenEstimator,
}

impl<'a> TokenBudget<'a> {
    pub fn new(estimator: &'a dyn ITokenEstimator) -> Self {
        Self { estimator }
    }

    /// How many tokens remain from a total budget after using `used`.
    pub fn remaining(total: usize, used: usize) -> usize {
        total.saturating_sub(used)
    }

    pub fn estimate(&self, text: &str) -> usize {
        self.estimator.estimate(text)
    }

    /// Whether the given text fits within the budget.
    pub fn fits(&self, text: &str, budget: usize) -> bool {
        self.estimator.fits(text, budget)
    }

    /// Tokens by which `text` exceeds `budget` (0 when it fits).
    pub fn overflow(&self, text: &str, budget: usize) -> usize {
        self.estimate(text).saturating_sub(budget)
    }
}
