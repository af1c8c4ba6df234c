//! Core data types for participants, rosters, and identifiers.

pub mod participant;
pub mod roster;
pub mod types;
