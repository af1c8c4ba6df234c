use crate::core::participant::Participant;

/// Point weights for the pairwise compatibility conditions.
///
/// Each condition triggers independently and contributes its weight to the
/// pair's score. The defaults reproduce the original weighting; all of them
/// can be overridden from the command line or the web form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreWeights {
    /// Same experience descriptor
    pub experience: i32,
    /// Same professional field
    pub field: i32,
    /// Mentor is at a later career stage than the mentee
    pub career_gap: i32,
    /// Mentor holds a more advanced study level than the mentee
    pub study_gap: i32,
    /// Mentor's capacities cover the mentee's stated objective
    pub objective: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            experience: 2,
            field: 2,
            career_gap: 3,
            study_gap: 1,
            objective: 3,
        }
    }
}

/// Compatibility score for an ordered (mentee, mentor) pair.
///
/// The score is directional: career and study comparisons expect the mentor
/// to be ahead of the mentee, and objective coverage reads the mentee's
/// objective against the mentor's capacities.
#[must_use]
pub fn compatibility_score(mentee: &Participant, mentor: &Participant, w: &ScoreWeights) -> i32 {
    let mut score = 0;

    if mentee.experience == mentor.experience {
        score += w.experience;
    }
    if mentee.field == mentor.field {
        score += w.field;
    }
    if mentee.career_stage < mentor.career_stage {
        score += w.career_gap;
    }
    if mentee.studies < mentor.studies {
        score += w.study_gap;
    }
    if mentee.objective_covered_by(mentor) {
        score += w.objective;
    }

    score
}
