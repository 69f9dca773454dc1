mod coach_error;
mod config_error;
mod tokenizer_error;

pub use coach_error::CoachError;
pub use config_error::ConfigError;
pub use tokenizer_error::TokenizerError;

/// Result alias used across the workspace.
pub type CoachResult<T> = Result<T, CoachError>;
