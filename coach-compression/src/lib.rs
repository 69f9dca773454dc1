//! # coach-compression
//!
//! Turns a user's full coaching history into a fixed-shape, budget-bounded digest.
//!
//! ## Architecture
//!
//! ```text
//! ContextCompressor (IContextCompressor)
//! ├── Prioritizer
//! │   ├── active goals, today's meals, newest workouts
//! │   └── FactSelector (constraints always kept, confidence or query ranking)
//! ├── Summarizers (workouts, nutrition, activities)
//! └── Truncator
//!     ├── Stages (shorten summaries → cap workouts → cap facts)
//!     └── Fallback (serialized cut → minimal object)
//! ```

pub mod engine;
pub mod facts;
pub mod prioritizer;
pub mod summarize;
pub mod truncation;

pub use engine::ContextCompressor;
pub use facts::FactSelector;
pub use prioritizer::Prioritizer;
pub use truncation::{Truncated, Truncator};
