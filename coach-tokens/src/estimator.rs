use coach_core::constants::CHARS_PER_TOKEN;
use coach_core::traits::ITokenEstimator;

/// Chars-per-token approximation over the UTF-8 byte length.
///
/// Not a tokenizer. It overestimates for plain English and underestimates
/// for CJK, but it is deterministic and costs one division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicEstimator {
    chars_per_token: usize,
}

impl HeuristicEstimator {
    /// # Panics
    /// Panics if `chars_per_token` is zero.
    pub fn new(chars_per_token: usize) -> Self {
        assert!(chars_per_token > 0, "chars_per_token must be greater than zero");
        Self { chars_per_token }
    }

    pub fn chars_per_token(&self) -> usize {
        self.chars_per_token
    }
}

impl Default for HeuristicEstimator {
    fn default() -> Self {
        Self::new(CHARS_PER_TOKEN)
    }
}

impl ITokenEstimator for HeuristicEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.len().div_ceil(self.chars_per_token)
    }
}
