mod compressor;
mod token_estimator;

pub use compressor::IContextCompressor;
pub use token_estimator::ITokenEstimator;
