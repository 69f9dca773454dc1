use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Confidence;

/// Category of an extracted fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FactType {
    Preference,
    /// Safety-relevant limitation (injury, allergy). Never dropped by ranking.
    Constraint,
    Pattern,
    Event,
    Goal,
    Achievement,
    Routine,
}

/// Where a fact came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FactSource {
    #[default]
    Conversation,
    ExplicitInput,
    Inferred,
}

/// An atomic, confidence-scored statement about the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MemoryFact {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    pub fact_type: FactType,
    pub content: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub source: FactSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl MemoryFact {
    /// Minimal fact with the fields ranking looks at.
    pub fn new(
        fact_type: FactType,
        content: impl Into<String>,
        confidence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            fact_type,
            content: content.into(),
            confidence: Confidence::new(confidence),
            source: FactSource::default(),
            metadata: None,
            created_at,
            updated_at: None,
            expires_at: None,
            is_active: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_constraint(&self) -> bool {
        self.fact_type == FactType::Constraint
    }
}
