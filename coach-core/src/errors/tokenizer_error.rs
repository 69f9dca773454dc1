/// Token counting errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("tokenizer load failed: {encoding}: {reason}")]
    LoadFailed { encoding: String, reason: String },
}
