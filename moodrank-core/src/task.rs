//! Task model for the mood-aware ranking pipeline.

use serde::{Deserialize, Serialize};

/// Energy a task demands (and a requester has available).
///
/// Wire format is lowercase ("low" / "medium" / "high"); anything else is
/// a deserialization error caught at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

/// A candidate task supplied per request. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Wire field is "task" (the task's display name).
    #[serde(rename = "task")]
    pub name: String,

    /// Free-form descriptive tags, matched set-wise against mood tags.
    pub tags: Vec<String>,

    /// Estimated duration in minutes. `u32` keeps negatives out at parse time.
    pub time: u32,

    /// Energy level the task requires.
    pub energy: EnergyLevel,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            time: 30,
            energy: EnergyLevel::Medium,
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = minutes;
        self
    }

    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy = energy;
        self
    }
}

/// Transient (name, score) pair produced while ranking; never serialized
/// back to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTask {
    pub name: String,
    pub score: f64,
}
