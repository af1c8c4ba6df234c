use std::cmp::Reverse;

use crate::core::roster::Roster;
use crate::core::types::{MenteeId, MentorId};
use crate::matching::scoring::{compatibility_score, ScoreWeights};

/// Both preference tables, indexed by participant id.
///
/// `mentee_prefs[i]` is mentee `i`'s total ranking of every mentor, best
/// first. `mentor_prefs[j]` is mentor `j`'s total ranking of every mentee.
/// Each list is a permutation of the full opposite population; the solver
/// consumes the tables read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTables {
    pub mentee_prefs: Vec<Vec<MentorId>>,
    pub mentor_prefs: Vec<Vec<MenteeId>>,
}

impl PreferenceTables {
    #[must_use]
    pub fn mentee_count(&self) -> usize {
        self.mentee_prefs.len()
    }

    #[must_use]
    pub fn mentor_count(&self) -> usize {
        self.mentor_prefs.len()
    }
}

/// Build both preference tables from the rosters.
///
/// Mentee side: every mentor is scored against the mentee and sorted by
/// descending score. The sort is stable, so tied mentors keep their roster
/// enumeration order.
///
/// Mentor side: a mentor's ranking is *derived* from the mentee table
/// rather than scored independently. Mentor `j` prefers mentee `i` over
/// mentee `k` exactly when `i` ranked `j` higher than `k` did (ties again
/// keep roster order). This reproduces the original algorithm's one-sided
/// scoring; the derived lists are still genuine total orders, which is all
/// the deferred-acceptance run requires.
///
/// Pure function of its inputs; empty rosters produce empty tables.
#[must_use]
pub fn build_preferences(
    mentees: &Roster,
    mentors: &Roster,
    weights: &ScoreWeights,
) -> PreferenceTables {
    let mentee_prefs: Vec<Vec<MentorId>> = mentees
        .iter()
        .map(|mentee| {
            let mut scored: Vec<(MentorId, i32)> = mentors
                .iter()
                .enumerate()
                .map(|(j, mentor)| (MentorId(j), compatibility_score(mentee, mentor, weights)))
                .collect();
            // Stable: ties keep mentor enumeration order
            scored.sort_by_key(|&(_, score)| Reverse(score));
            scored.into_iter().map(|(id, _)| id).collect()
        })
        .collect();

    // Position of each mentor within each mentee's list, for the derivation
    let mut rank_of_mentor: Vec<Vec<usize>> = vec![vec![0; mentors.len()]; mentees.len()];
    for (i, prefs) in mentee_prefs.iter().enumerate() {
        for (position, mentor) in prefs.iter().enumerate() {
            rank_of_mentor[i][mentor.0] = position;
        }
    }

    let mentor_prefs: Vec<Vec<MenteeId>> = (0..mentors.len())
        .map(|j| {
            let mut ranked: Vec<(MenteeId, usize)> = (0..mentees.len())
                .map(|i| (MenteeId(i), rank_of_mentor[i][j]))
                .collect();
            // Stable: ties keep mentee enumeration order
            ranked.sort_by_key(|&(_, position)| position);
            ranked.into_iter().map(|(id, _)| id).collect()
        })
        .collect();

    PreferenceTables {
        mentee_prefs,
        mentor_prefs,
    }
}
