//! # pair-solver
//!
//! A library for pairing mentees with mentors through stable matching.
//!
//! Hand-assigning mentoring pairs does not scale: every added participant
//! multiplies the combinations to weigh, and ad-hoc picks leave pairs where
//! both sides would rather be with someone else. `pair-solver` scores every
//! (mentee, mentor) combination, turns the scores into preference rankings,
//! and runs deferred acceptance (Gale-Shapley) to produce a one-to-one
//! assignment with no such blocking pair.
//!
//! ## Features
//!
//! - **Weighted compatibility scoring**: Shared experience and field,
//!   career and study seniority, and objective/capacity coverage
//! - **Derived mentor preferences**: Mentors rank the mentees that
//!   ranked them highest, so a single roster survey is enough
//! - **Stable assignments**: No mentee and mentor both prefer each
//!   other over what they were assigned
//! - **Uneven rosters**: Surplus participants are reported as unmatched,
//!   never treated as an error
//!
//! ## Example
//!
//! ```rust
//! use pair_solver::core::types::Role;
//! use pair_solver::matching::engine::{PairingConfig, PairingEngine};
//! use pair_solver::parsing::parse_roster_text;
//!
//! let mentees = parse_roster_text(
//!     "name,experience,field,career_stage,studies,objectives\n\
//!      Ada,3 years,software,early,bachelor,code review\n",
//!     Role::Mentee,
//! ).unwrap();
//! let mentors = parse_roster_text(
//!     "name,experience,field,career_stage,studies,capacities\n\
//!      Grace,15 years,software,senior,phd,code review\n",
//!     Role::Mentor,
//! ).unwrap();
//!
//! let engine = PairingEngine::new(&mentees, &mentors, PairingConfig::default());
//! let result = engine.pair();
//! assert_eq!(result.pairs[0].mentor_name, "Grace");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for participants, rosters, and ids
//! - [`matching`]: Preference construction and the stable-matching engine
//! - [`parsing`]: Roster CSV parser
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based pairing

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use self::core::participant::Participant;
pub use self::core::roster::Roster;
pub use self::core::types::*;
pub use self::matching::engine::{PairingConfig, PairingEngine, PairingResult};
pub use self::matching::preferences::build_preferences;
pub use self::matching::scoring::ScoreWeights;
pub use self::matching::stable::StableMatcher;
