use super::{ConfigError, TokenizerError};

/// Top-level error for the fallible edges of the workspace.
///
/// Compression itself never fails; only configuration loading and
/// exact-tokenizer construction can.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error("invalid token budget: {max_tokens}")]
    InvalidBudget { max_tokens: usize },
}
