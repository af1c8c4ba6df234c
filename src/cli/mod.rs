//! Command-line interface for pair-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assign**: Pair a mentee roster with a mentor roster
//! - **rank**: Show the preference tables the solver would consume
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Pair two rosters
//! pair-solver assign mentees.csv mentors.csv
//!
//! # JSON output for scripting
//! pair-solver assign mentees.csv mentors.csv --format json
//!
//! # Inspect the preference rankings behind an assignment
//! pair-solver rank mentees.csv mentors.csv
//!
//! # Adjust scoring weights
//! pair-solver assign mentees.csv mentors.csv --weight-field 5
//!
//! # Start web UI
//! pair-solver serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

use crate::matching::ScoreWeights;

pub mod assign;
pub mod rank;

#[derive(Parser)]
#[command(name = "pair-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Solve stable mentor/mentee assignments from roster files")]
#[command(
    long_about = "pair-solver builds a compatibility ranking between a mentee roster and a mentor roster, then runs deferred acceptance (Gale-Shapley) to produce a one-to-one assignment that is stable with respect to those rankings.\n\nUnmatched participants are a normal outcome when the rosters differ in size; they are reported, never treated as an error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pair a mentee roster with a mentor roster
    Assign(assign::AssignArgs),

    /// Show the preference tables derived from two rosters
    Rank(rank::RankArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scoring weight flags shared by `assign` and `rank`
#[derive(Debug, Clone, clap::Args)]
pub struct WeightArgs {
    /// Points for a shared experience descriptor (0-100, default 2)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_experience: u32,

    /// Points for a shared professional field (0-100, default 2)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_field: u32,

    /// Points when the mentor is at a later career stage (0-100, default 3)
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_career: u32,

    /// Points when the mentor holds a more advanced study level (0-100, default 1)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_studies: u32,

    /// Points when the mentor's capacities cover the mentee's objective (0-100, default 3)
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub weight_objective: u32,
}

impl WeightArgs {
    #[must_use]
    pub fn to_weights(&self) -> ScoreWeights {
        #[allow(clippy::cast_possible_wrap)] // Flags are capped at 100
        ScoreWeights {
            experience: self.weight_experience as i32,
            field: self.weight_field as i32,
            career_gap: self.weight_career as i32,
            study_gap: self.weight_studies as i32,
            objective: self.weight_objective as i32,
        }
    }
}
