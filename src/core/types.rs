use serde::{Deserialize, Serialize};

/// Identifier for a mentee: the row index within the mentee roster.
/// Assigned at ingestion time and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenteeId(pub usize);

impl std::fmt::Display for MenteeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mentee-{}", self.0)
    }
}

/// Identifier for a mentor: the row index within the mentor roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentorId(pub usize);

impl std::fmt::Display for MentorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mentor-{}", self.0)
    }
}

/// Which side of the pairing a roster belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Mentee,
    Mentor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mentee => write!(f, "mentee"),
            Self::Mentor => write!(f, "mentor"),
        }
    }
}

/// Career stage on an explicit ordinal scale.
///
/// Scoring compares stages with `<` (a mentor is expected to be further
/// along than their mentee), so the order of the variants is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerStage {
    Student,
    EarlyCareer,
    MidCareer,
    Senior,
    Executive,
}

impl CareerStage {
    /// Parse a career stage from roster text. Returns `None` for values
    /// outside the known scale; ingestion rejects those rows.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" | "intern" => Some(Self::Student),
            "early" | "early career" | "early_career" | "junior" => Some(Self::EarlyCareer),
            "mid" | "mid career" | "mid_career" | "intermediate" => Some(Self::MidCareer),
            "senior" | "lead" => Some(Self::Senior),
            "executive" | "principal" | "director" => Some(Self::Executive),
            _ => None,
        }
    }
}

impl std::fmt::Display for CareerStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::EarlyCareer => write!(f, "early career"),
            Self::MidCareer => write!(f, "mid career"),
            Self::Senior => write!(f, "senior"),
            Self::Executive => write!(f, "executive"),
        }
    }
}

/// Highest completed study level, ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl StudyLevel {
    /// Parse a study level from roster text. Returns `None` for values
    /// outside the known scale.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high school" | "high_school" | "highschool" | "secondary" => Some(Self::HighSchool),
            "associate" | "associates" => Some(Self::Associate),
            "bachelor" | "bachelors" | "bsc" | "ba" | "undergraduate" => Some(Self::Bachelor),
            "master" | "masters" | "msc" | "ma" | "mba" => Some(Self::Master),
            "doctorate" | "doctoral" | "phd" | "dphil" => Some(Self::Doctorate),
            _ => None,
        }
    }
}

impl std::fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighSchool => write!(f, "high school"),
            Self::Associate => write!(f, "associate"),
            Self::Bachelor => write!(f, "bachelor"),
            Self::Master => write!(f, "master"),
            Self::Doctorate => write!(f, "doctorate"),
        }
    }
}
