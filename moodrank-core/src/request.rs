//! Typed request boundary.
//!
//! Structural problems (missing fields, bad enum values, negative time)
//! are serde errors raised during deserialization; `validate` covers the
//! rules serde cannot express.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::moods::MOOD_CATEGORIES;
use crate::ranker::filter_and_rank;
use crate::sentiment::SentimentScorer;
use crate::task::{EnergyLevel, Task};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{field}` may not be blank")]
    BlankField { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::BlankField { field } => field,
        }
    }
}

/// One fully-validated analyse request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyseRequest {
    pub mood: String,
    pub energy: EnergyLevel,
    pub time: u32,
    pub tasks: Vec<Task>,
}

impl AnalyseRequest {
    /// Rules beyond the wire schema: mood may not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mood.trim().is_empty() {
            return Err(ValidationError::BlankField { field: "mood" });
        }
        Ok(())
    }

    /// Run the whole pipeline against the static category table and
    /// return ranked task names.
    pub fn analyse(&self, sentiment: &dyn SentimentScorer) -> Vec<String> {
        let mood = self.mood.trim().to_lowercase();
        filter_and_rank(
            &self.tasks,
            &mood,
            self.energy,
            self.time,
            MOOD_CATEGORIES,
            sentiment,
        )
    }
}
