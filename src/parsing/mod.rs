//! Parsers for loading participant rosters from tabular files.
//!
//! A roster is a CSV file with one participant per row:
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | name | Display name | Yes |
//! | experience | Experience descriptor | Yes |
//! | field | Professional field | Yes |
//! | career_stage | Ordinal career stage | Yes |
//! | studies | Ordinal study level | Yes |
//! | objectives | What a mentee is looking for | No |
//! | capacities | What a mentor can offer | No |
//!
//! Free-text attributes are lower-cased during parsing; ordinal columns are
//! mapped onto explicit scales and rejected when unknown, so the matching
//! core never has to compare raw strings.

pub mod roster;

pub use roster::{parse_roster_file, parse_roster_text, ParseError};
