use crate::core::roster::Roster;
use crate::core::types::{MenteeId, MentorId};
use crate::matching::preferences::{build_preferences, PreferenceTables};
use crate::matching::scoring::{compatibility_score, ScoreWeights};
use crate::matching::stable::{Assignment, StableMatcher};

/// Configuration for a pairing run
#[derive(Debug, Clone, Default)]
pub struct PairingConfig {
    /// Scoring weights used by the preference builder
    pub weights: ScoreWeights,
}

/// One matched pair, with display names resolved for presentation
#[derive(Debug, Clone)]
pub struct MatchedPair {
    pub mentor: MentorId,
    pub mentee: MenteeId,
    pub mentor_name: String,
    pub mentee_name: String,
    /// Compatibility score of the pair (mentee side)
    pub score: i32,
}

/// Full outcome of a pairing run.
///
/// Unmatched participants are listed explicitly rather than signalled as
/// errors; a size mismatch between the rosters always leaves someone over.
#[derive(Debug, Clone)]
pub struct PairingResult {
    /// Matched pairs in mentor-id order
    pub pairs: Vec<MatchedPair>,
    pub unmatched_mentees: Vec<(MenteeId, String)>,
    pub unmatched_mentors: Vec<(MentorId, String)>,
}

impl PairingResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The main pairing engine: preference construction followed by deferred
/// acceptance over the resulting tables.
pub struct PairingEngine<'a> {
    mentees: &'a Roster,
    mentors: &'a Roster,
    config: PairingConfig,
}

impl<'a> PairingEngine<'a> {
    #[must_use]
    pub fn new(mentees: &'a Roster, mentors: &'a Roster, config: PairingConfig) -> Self {
        Self {
            mentees,
            mentors,
            config,
        }
    }

    /// Build both preference tables without running the solver.
    /// Used by the inspection command and the tests.
    #[must_use]
    pub fn preferences(&self) -> PreferenceTables {
        build_preferences(self.mentees, self.mentors, &self.config.weights)
    }

    /// Run the full pipeline and resolve display names for the result.
    #[must_use]
    pub fn pair(&self) -> PairingResult {
        let tables = self.preferences();
        let assignment = StableMatcher::new(&tables).solve();

        tracing::info!(
            mentees = self.mentees.len(),
            mentors = self.mentors.len(),
            matched = assignment.len(),
            "pairing complete"
        );

        self.resolve(&assignment)
    }

    /// Pairwise compatibility score, re-derived from the rosters
    #[must_use]
    pub fn score(&self, mentee: MenteeId, mentor: MentorId) -> i32 {
        compatibility_score(
            &self.mentees.participants[mentee.0],
            &self.mentors.participants[mentor.0],
            &self.config.weights,
        )
    }

    fn resolve(&self, assignment: &Assignment) -> PairingResult {
        let pairs: Vec<MatchedPair> = assignment
            .iter()
            .map(|(mentor, mentee)| MatchedPair {
                mentor,
                mentee,
                mentor_name: self.mentors.display_name(mentor.0),
                mentee_name: self.mentees.display_name(mentee.0),
                score: self.score(mentee, mentor),
            })
            .collect();

        let unmatched_mentees = (0..self.mentees.len())
            .map(MenteeId)
            .filter(|&id| assignment.mentor_for(id).is_none())
            .map(|id| (id, self.mentees.display_name(id.0)))
            .collect();

        let unmatched_mentors = (0..self.mentors.len())
            .map(MentorId)
            .filter(|&id| assignment.mentee_for(id).is_none())
            .map(|id| (id, self.mentors.display_name(id.0)))
            .collect();

        PairingResult {
            pairs,
            unmatched_mentees,
            unmatched_mentors,
        }
    }
}
