use std::collections::{BTreeMap, VecDeque};

use crate::core::types::{MenteeId, MentorId};
use crate::matching::preferences::PreferenceTables;

/// The final mentor → mentee assignment.
///
/// Contains only matched pairs; a participant absent from the mapping is
/// unmatched, which is a normal terminal outcome whenever the populations
/// differ in size. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairs: BTreeMap<MentorId, MenteeId>,
}

impl Assignment {
    #[must_use]
    pub fn mentee_for(&self, mentor: MentorId) -> Option<MenteeId> {
        self.pairs.get(&mentor).copied()
    }

    #[must_use]
    pub fn mentor_for(&self, mentee: MenteeId) -> Option<MentorId> {
        self.pairs
            .iter()
            .find(|(_, &m)| m == mentee)
            .map(|(&mentor, _)| mentor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Matched pairs in mentor-id order.
    pub fn iter(&self) -> impl Iterator<Item = (MentorId, MenteeId)> + '_ {
        self.pairs.iter().map(|(&mentor, &mentee)| (mentor, mentee))
    }
}

/// Deferred-acceptance solver over a pair of preference tables.
///
/// Mentees propose in preference order; each mentor provisionally holds the
/// best proposer seen so far and releases the previous one back into the
/// free queue. The queue is FIFO so a run is fully reproducible, though the
/// final assignment does not depend on pop order.
pub struct StableMatcher<'a> {
    tables: &'a PreferenceTables,
}

/// Per-run record of what the solver did; the tests check the algorithm's
/// invariants against it.
#[derive(Debug, Default)]
struct SolveTrace {
    /// Total proposals made over the run
    proposals: usize,
    /// One entry per engagement change: the mentor, the rank of the mentee
    /// it previously held (None for a first engagement), and the rank of
    /// the mentee it now holds
    engagements: Vec<(MentorId, Option<usize>, usize)>,
}

impl<'a> StableMatcher<'a> {
    #[must_use]
    pub fn new(tables: &'a PreferenceTables) -> Self {
        Self { tables }
    }

    /// Run the algorithm to completion and return the final assignment.
    ///
    /// Always terminates: each mentee proposes to each mentor at most once,
    /// bounding the loop by |mentees| × |mentors| proposals. A mentee that
    /// exhausts its list is dropped permanently; mentors left without a
    /// proposal stay out of the assignment.
    #[must_use]
    pub fn solve(&self) -> Assignment {
        self.solve_traced().0
    }

    fn solve_traced(&self) -> (Assignment, SolveTrace) {
        let mentee_count = self.tables.mentee_count();
        let mentor_count = self.tables.mentor_count();

        // Rank lookup derived from the mentor lists at the start of the
        // run; lower rank means more preferred.
        let mut mentor_rank: Vec<Vec<usize>> = vec![vec![0; mentee_count]; mentor_count];
        for (j, prefs) in self.tables.mentor_prefs.iter().enumerate() {
            for (rank, mentee) in prefs.iter().enumerate() {
                mentor_rank[j][mentee.0] = rank;
            }
        }

        // Solver state, local to this run
        let mut engagements: Vec<Option<MenteeId>> = vec![None; mentor_count];
        let mut proposals_made: Vec<usize> = vec![0; mentee_count];
        let mut free: VecDeque<MenteeId> = (0..mentee_count).map(MenteeId).collect();
        let mut trace = SolveTrace::default();

        while let Some(mentee) = free.pop_front() {
            let prefs = &self.tables.mentee_prefs[mentee.0];
            let next = proposals_made[mentee.0];
            if next >= prefs.len() {
                // List exhausted: permanently unmatched
                continue;
            }

            let mentor = prefs[next];
            proposals_made[mentee.0] += 1;
            trace.proposals += 1;
            debug_assert!(
                trace.proposals <= mentee_count * mentor_count,
                "proposal bound exceeded"
            );

            let ranks = &mentor_rank[mentor.0];
            match engagements[mentor.0] {
                None => {
                    trace.engagements.push((mentor, None, ranks[mentee.0]));
                    engagements[mentor.0] = Some(mentee);
                }
                Some(current) if ranks[mentee.0] < ranks[current.0] => {
                    // Each re-engagement strictly improves the mentor's held rank
                    trace
                        .engagements
                        .push((mentor, Some(ranks[current.0]), ranks[mentee.0]));
                    engagements[mentor.0] = Some(mentee);
                    free.push_back(current);
                }
                Some(_) => {
                    // Rejected; the mentee will try its next choice later
                    free.push_back(mentee);
                }
            }
        }

        tracing::debug!(
            proposals = trace.proposals,
            engagement_changes = trace.engagements.len(),
            matched = engagements.iter().flatten().count(),
            "deferred acceptance finished"
        );

        let pairs = engagements
            .into_iter()
            .enumerate()
            .filter_map(|(j, held)| held.map(|mentee| (MentorId(j), mentee)))
            .collect();

        (Assignment { pairs }, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentor_lists(lists: &[&[usize]]) -> Vec<Vec<MenteeId>> {
        lists
            .iter()
            .map(|l| l.iter().copied().map(MenteeId).collect())
            .collect()
    }

    fn mentee_lists(lists: &[&[usize]]) -> Vec<Vec<MentorId>> {
        lists
            .iter()
            .map(|l| l.iter().copied().map(MentorId).collect())
            .collect()
    }

    fn tables(mentees: &[&[usize]], mentors: &[&[usize]]) -> PreferenceTables {
        PreferenceTables {
            mentee_prefs: mentee_lists(mentees),
            mentor_prefs: mentor_lists(mentors),
        }
    }

    #[test]
    fn test_crossed_first_choices() {
        // Mentee 0 wants mentor 0 first, mentee 1 wants mentor 1 first,
        // and each mentor reciprocates: both get their top pick.
        let t = tables(&[&[0, 1], &[1, 0]], &[&[0, 1], &[1, 0]]);
        let assignment = StableMatcher::new(&t).solve();

        assert_eq!(assignment.mentee_for(MentorId(0)), Some(MenteeId(0)));
        assert_eq!(assignment.mentee_for(MentorId(1)), Some(MenteeId(1)));
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn test_more_mentees_than_mentors() {
        // Three mentees, two mentors, fully tied preferences: exactly one
        // mentee stays unmatched and every mentor is matched.
        let t = tables(
            &[&[0, 1], &[0, 1], &[0, 1]],
            &[&[0, 1, 2], &[0, 1, 2]],
        );
        let assignment = StableMatcher::new(&t).solve();

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.mentee_for(MentorId(0)), Some(MenteeId(0)));
        assert_eq!(assignment.mentee_for(MentorId(1)), Some(MenteeId(1)));
        assert_eq!(assignment.mentor_for(MenteeId(2)), None);
    }

    #[test]
    fn test_more_mentors_than_mentees() {
        let t = tables(&[&[2, 0, 1]], &[&[0], &[0], &[0]]);
        let assignment = StableMatcher::new(&t).solve();

        assert_eq!(assignment.len(), 1);
        assert_eq!(assignment.mentee_for(MentorId(2)), Some(MenteeId(0)));
        assert_eq!(assignment.mentee_for(MentorId(0)), None);
    }

    #[test]
    fn test_empty_tables() {
        let t = tables(&[], &[]);
        let assignment = StableMatcher::new(&t).solve();
        assert!(assignment.is_empty());

        // Mentees with nobody to propose to terminate immediately
        let t = tables(&[&[], &[]], &[]);
        let assignment = StableMatcher::new(&t).solve();
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_displacement_chain() {
        // Every mentee prefers mentor 0; mentor 0 prefers the last mentee.
        // Earlier proposers get displaced and settle on later choices.
        let t = tables(
            &[&[0, 1, 2], &[0, 1, 2], &[0, 1, 2]],
            &[&[2, 1, 0], &[2, 1, 0], &[2, 1, 0]],
        );
        let assignment = StableMatcher::new(&t).solve();

        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.mentee_for(MentorId(0)), Some(MenteeId(2)));
        assert_eq!(assignment.mentee_for(MentorId(1)), Some(MenteeId(1)));
        assert_eq!(assignment.mentee_for(MentorId(2)), Some(MenteeId(0)));
    }

    #[test]
    fn test_held_mentee_only_improves() {
        // Contested mentor 0 is displaced twice; its held rank must get
        // strictly better with every engagement change, never worse.
        let t = tables(
            &[&[0, 1, 2], &[0, 1, 2], &[0, 1, 2]],
            &[&[2, 1, 0], &[2, 1, 0], &[2, 1, 0]],
        );
        let (_, trace) = StableMatcher::new(&t).solve_traced();

        let mut held: Vec<Option<usize>> = vec![None; 3];
        for &(mentor, previous, new) in &trace.engagements {
            assert_eq!(held[mentor.0], previous);
            if let Some(previous) = previous {
                assert!(
                    new < previous,
                    "held rank worsened for {mentor}: {previous} -> {new}"
                );
            }
            held[mentor.0] = Some(new);
        }

        let displacements = trace
            .engagements
            .iter()
            .filter(|&&(mentor, previous, _)| mentor == MentorId(0) && previous.is_some())
            .count();
        assert_eq!(displacements, 2);
    }

    #[test]
    fn test_proposal_bound() {
        // Maximal contention: every mentee shares the same ordering and
        // every mentor ranks them in reverse, forcing a displacement
        // cascade. The run must still finish within |mentees| x |mentors|
        // proposals.
        let t = tables(
            &[&[0, 1, 2], &[0, 1, 2], &[0, 1, 2]],
            &[&[2, 1, 0], &[2, 1, 0], &[2, 1, 0]],
        );
        let (assignment, trace) = StableMatcher::new(&t).solve_traced();
        assert!(trace.proposals <= 3 * 3);
        assert_eq!(assignment.len(), 3);

        let t = tables(
            &[&[1, 0, 2], &[0, 2, 1], &[0, 1, 2], &[2, 1, 0]],
            &[&[3, 1, 0, 2], &[0, 2, 1, 3], &[1, 0, 3, 2]],
        );
        let (assignment, trace) = StableMatcher::new(&t).solve_traced();
        assert!(trace.proposals <= 4 * 3);
        assert_eq!(assignment.len(), 3);
    }

    #[test]
    fn test_idempotence() {
        let t = tables(
            &[&[1, 0, 2], &[0, 2, 1], &[0, 1, 2], &[2, 1, 0]],
            &[&[3, 1, 0, 2], &[0, 2, 1, 3], &[1, 0, 3, 2]],
        );
        let first = StableMatcher::new(&t).solve();
        let second = StableMatcher::new(&t).solve();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_rejected_preferred_proposer() {
        // Weak stability: no mentor ends up holding a mentee it ranks
        // below another mentee that proposed to it during the run. With
        // complete lists every mentee proposes to every mentor it would
        // rather have than its final partner, so it suffices to check all
        // (mentee, mentor) pairs the mentee prefers over its outcome.
        let t = tables(
            &[&[0, 1, 2], &[1, 0, 2], &[1, 2, 0]],
            &[&[1, 2, 0], &[2, 0, 1], &[0, 1, 2]],
        );
        let assignment = StableMatcher::new(&t).solve();

        for (i, prefs) in t.mentee_prefs.iter().enumerate() {
            let mentee = MenteeId(i);
            let assigned = assignment.mentor_for(mentee);
            let assigned_rank = assigned
                .and_then(|m| prefs.iter().position(|&p| p == m))
                .unwrap_or(prefs.len());

            for &mentor in &prefs[..assigned_rank] {
                // The mentee prefers this mentor over its outcome; the
                // mentor must prefer its held mentee over this one.
                let held = assignment
                    .mentee_for(mentor)
                    .expect("a preferred mentor cannot be unmatched");
                let ranks = &t.mentor_prefs[mentor.0];
                let held_rank = ranks.iter().position(|&p| p == held).unwrap();
                let rival_rank = ranks.iter().position(|&p| p == mentee).unwrap();
                assert!(
                    held_rank < rival_rank,
                    "blocking pair: {mentee} and {mentor}"
                );
            }
        }
    }
}
