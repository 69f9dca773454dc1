pub mod compressed_context;
pub mod compression_report;
pub mod confidence;
pub mod conversation;
pub mod goal;
pub mod memory_fact;
pub mod patterns;
pub mod preferences;
pub mod profile;
pub mod raw_context;
pub mod records;
pub mod trends;

pub use compressed_context::{CompressedContext, PrioritizedView};
pub use compression_report::{
    CompressionOutcome, CompressionReport, CompressionRequest, TruncationStage,
};
pub use confidence::Confidence;
pub use conversation::{ConversationSentiment, ConversationSummary};
pub use goal::Goal;
pub use memory_fact::{FactSource, FactType, MemoryFact};
pub use patterns::{NutritionPattern, WorkoutPattern};
pub use preferences::{
    CommunicationStyle, DetailLevel, InjuryConstraint, InjurySeverity, Intensity, KeyPreferences,
    MotivationStyle, NutritionPreferences, PreferenceProfile, PreferredTime, ReminderFrequency,
    Tone, TimeConstraint, TrackingDetail, TrainingEnvironment, UserConstraints,
    WorkoutPreferences,
};
pub use profile::UserProfile;
pub use raw_context::RawContext;
pub use records::{Activity, Meal, WorkoutSession};
pub use trends::{LongTermTrends, TrendData, TrendDirection};
