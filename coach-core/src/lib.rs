//! # coach-core
//!
//! Foundation crate for coach context compression.
//! Defines the raw and compressed context models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CoachConfig;
pub use errors::{CoachError, CoachResult};
pub use models::{
    CompressedContext, FactType, MemoryFact, PrioritizedView, RawContext,
};
