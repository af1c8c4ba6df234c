//! Preference construction and the stable-matching engine.
//!
//! The pipeline has two stages, consumed in sequence:
//!
//! 1. [`build_preferences`]: score every (mentee, mentor) pair and turn the
//!    scores into total preference orders for both sides.
//! 2. [`StableMatcher`]: deferred acceptance (Gale–Shapley) from the mentee
//!    side over the two tables, yielding a one-to-one assignment.
//!
//! ## Scoring
//!
//! A pair's compatibility score is the sum of independently triggered
//! weighted conditions: shared experience, shared field, the mentor being
//! further along in career stage and studies, and the mentor's capacities
//! covering the mentee's objective. See [`ScoreWeights`] for the defaults.
//!
//! ## Derived mentor preferences
//!
//! Mentor rankings are not scored independently: mentor `j` prefers the
//! mentees that ranked `j` highest. The derived lists are still total
//! orders, which is what the stability guarantee requires.
//!
//! ## Example
//!
//! ```rust
//! use pair_solver::core::roster::Roster;
//! use pair_solver::core::types::Role;
//! use pair_solver::matching::engine::{PairingConfig, PairingEngine};
//!
//! let mentees = Roster::empty(Role::Mentee);
//! let mentors = Roster::empty(Role::Mentor);
//! let engine = PairingEngine::new(&mentees, &mentors, PairingConfig::default());
//! let result = engine.pair();
//! assert!(result.is_empty());
//! ```

pub mod engine;
pub mod preferences;
pub mod scoring;
pub mod stable;

pub use engine::{PairingConfig, PairingEngine, PairingResult};
pub use preferences::{build_preferences, PreferenceTables};
pub use scoring::ScoreWeights;
pub use stable::{Assignment, StableMatcher};
