use serde::Serialize;

use crate::core::types::{CareerStage, StudyLevel};

/// A single participant from either roster.
///
/// Attributes are normalized (trimmed, lower-cased free text) at the
/// ingestion boundary and read-only afterwards; the matching core never
/// mutates a participant. The display name keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    /// Display name, original casing
    pub name: String,

    /// Experience descriptor, lower-cased free text (compared for equality)
    pub experience: String,

    /// Professional field, lower-cased free text (compared for equality)
    pub field: String,

    /// Career stage on the ordinal scale
    pub career_stage: CareerStage,

    /// Highest study level on the ordinal scale
    pub studies: StudyLevel,

    /// What a mentee wants out of the pairing, lower-cased free text.
    /// Empty for participants that did not state one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub objective: String,

    /// What a mentor can offer, lower-cased free text.
    /// Empty for participants that did not state any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub capacities: String,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        experience: impl Into<String>,
        field: impl Into<String>,
        career_stage: CareerStage,
        studies: StudyLevel,
    ) -> Self {
        Self {
            name: name.into(),
            experience: experience.into(),
            field: field.into(),
            career_stage,
            studies,
            objective: String::new(),
            capacities: String::new(),
        }
    }

    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    #[must_use]
    pub fn with_capacities(mut self, capacities: impl Into<String>) -> Self {
        self.capacities = capacities.into();
        self
    }

    /// True when this participant stated an objective that the other
    /// participant's capacities text covers. Containment is substring-based
    /// over the normalized text; an empty objective never matches.
    #[must_use]
    pub fn objective_covered_by(&self, other: &Participant) -> bool {
        !self.objective.is_empty() && other.capacities.contains(&self.objective)
    }
}
