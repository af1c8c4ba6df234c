use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, WeightArgs};
use crate::core::roster::Roster;
use crate::core::types::{MenteeId, Role};
use crate::matching::engine::{PairingConfig, PairingEngine};
use crate::matching::preferences::PreferenceTables;
use crate::parsing;

#[derive(Args)]
pub struct RankArgs {
    /// Mentee roster CSV
    #[arg(required = true)]
    pub mentees: PathBuf,

    /// Mentor roster CSV
    #[arg(required = true)]
    pub mentors: PathBuf,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the rank subcommand.
///
/// Prints both preference tables without running the solver, so the
/// rankings behind an assignment can be inspected and tuned.
///
/// # Errors
///
/// Returns an error if either roster cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RankArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mentees = parsing::parse_roster_file(&args.mentees, Role::Mentee)?;
    let mentors = parsing::parse_roster_file(&args.mentors, Role::Mentor)?;

    if verbose {
        eprintln!(
            "Parsed {} mentees and {} mentors",
            mentees.len(),
            mentors.len()
        );
    }

    let engine = PairingEngine::new(
        &mentees,
        &mentors,
        PairingConfig {
            weights: args.weights.to_weights(),
        },
    );
    let tables = engine.preferences();

    match format {
        OutputFormat::Text => print_text_tables(&engine, &tables, &mentees, &mentors),
        OutputFormat::Json => print_json_tables(&engine, &tables, &mentees, &mentors)?,
        OutputFormat::Tsv => print_tsv_tables(&engine, &tables, &mentees, &mentors),
    }

    Ok(())
}

fn print_text_tables(
    engine: &PairingEngine<'_>,
    tables: &PreferenceTables,
    mentees: &Roster,
    mentors: &Roster,
) {
    println!("Mentee preferences (best first):");
    for (i, prefs) in tables.mentee_prefs.iter().enumerate() {
        let ranked: Vec<String> = prefs
            .iter()
            .map(|&m| {
                format!(
                    "{} ({})",
                    mentors.display_name(m.0),
                    engine.score(MenteeId(i), m)
                )
            })
            .collect();
        println!("  {}: {}", mentees.display_name(i), ranked.join(", "));
    }

    println!("\nMentor preferences (best first):");
    for (j, prefs) in tables.mentor_prefs.iter().enumerate() {
        let ranked: Vec<String> = prefs
            .iter()
            .map(|&m| mentees.display_name(m.0))
            .collect();
        println!("  {}: {}", mentors.display_name(j), ranked.join(", "));
    }
}

fn print_json_tables(
    engine: &PairingEngine<'_>,
    tables: &PreferenceTables,
    mentees: &Roster,
    mentors: &Roster,
) -> anyhow::Result<()> {
    let mentee_prefs: Vec<serde_json::Value> = tables
        .mentee_prefs
        .iter()
        .enumerate()
        .map(|(i, prefs)| {
            serde_json::json!({
                "id": i,
                "participant": &mentees.participants[i],
                "ranking": prefs.iter().map(|&m| serde_json::json!({
                    "id": m.0,
                    "name": mentors.display_name(m.0),
                    "score": engine.score(MenteeId(i), m),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let mentor_prefs: Vec<serde_json::Value> = tables
        .mentor_prefs
        .iter()
        .enumerate()
        .map(|(j, prefs)| {
            serde_json::json!({
                "id": j,
                "participant": &mentors.participants[j],
                "ranking": prefs.iter().map(|&m| serde_json::json!({
                    "id": m.0,
                    "name": mentees.display_name(m.0),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "mentee_preferences": mentee_prefs,
        "mentor_preferences": mentor_prefs,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_tables(
    engine: &PairingEngine<'_>,
    tables: &PreferenceTables,
    mentees: &Roster,
    mentors: &Roster,
) {
    println!("side\tparticipant\trank\tcandidate\tscore");
    for (i, prefs) in tables.mentee_prefs.iter().enumerate() {
        for (rank, &m) in prefs.iter().enumerate() {
            println!(
                "mentee\t{}\t{}\t{}\t{}",
                mentees.display_name(i),
                rank + 1,
                mentors.display_name(m.0),
                engine.score(MenteeId(i), m)
            );
        }
    }
    for (j, prefs) in tables.mentor_prefs.iter().enumerate() {
        for (rank, &m) in prefs.iter().enumerate() {
            println!(
                "mentor\t{}\t{}\t{}\t",
                mentors.display_name(j),
                rank + 1,
                mentees.display_name(m.0)
            );
        }
    }
}
