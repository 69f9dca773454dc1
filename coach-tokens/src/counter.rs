use moka::sync::Cache;
use std::sync::Arc;
use tiktoken_rs::CoreBPE;

use coach_core::errors::{CoachResult, TokenizerError};
use coach_core::traits::ITokenEstimator;

const ENCODING: &str = "cl100k_base";

/// Exact token counter wrapping tiktoken's cl100k_base tokenizer.
/// Caches results per blake3 content hash.
pub struct TokenCounter {
    bpe: Arc<CoreBPE>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Load the tokenizer with the given cache capacity.
    pub fn new(cache_capacity: u64) -> CoachResult<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::LoadFailed {
            encoding: ENCODING.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            bpe: Arc::new(bpe),
            cache: Cache::new(cache_capacity),
        })
    }

    /// Load the tokenizer with a 10k-entry cache.
    pub fn with_default_capacity() -> CoachResult<Self> {
        Self::new(10_000)
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Count tokens with blake3 content-hash caching.
    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

impl ITokenEstimator for TokenCounter {
    fn estimate(&self, text: &str) -> usize {
        self.count_cached(text)
    }
}
