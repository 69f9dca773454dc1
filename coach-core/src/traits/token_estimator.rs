/// Estimates how many tokens a serialized text costs.
///
/// Truncation only ever asks "how big is this", so swapping the heuristic for
/// an exact tokenizer does not touch the reduction order.
pub trait ITokenEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> usize;

    /// Whether `text` fits in `budget` tokens.
    fn fits(&self, text: &str, budget: usize) -> bool {
        self.estimate(text) <= budget
    }
}
