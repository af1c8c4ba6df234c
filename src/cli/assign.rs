use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, WeightArgs};
use crate::core::types::Role;
use crate::matching::engine::{PairingConfig, PairingEngine, PairingResult};
use crate::matching::ScoreWeights;
use crate::parsing;

#[derive(Args)]
pub struct AssignArgs {
    /// Mentee roster CSV
    #[arg(required = true)]
    pub mentees: PathBuf,

    /// Mentor roster CSV
    #[arg(required = true)]
    pub mentors: PathBuf,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the assign subcommand
///
/// # Errors
///
/// Returns an error if either roster cannot be parsed. Unmatched
/// participants are reported in the output, not as errors.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mentees = parsing::parse_roster_file(&args.mentees, Role::Mentee)?;
    let mentors = parsing::parse_roster_file(&args.mentors, Role::Mentor)?;

    if verbose {
        eprintln!(
            "Parsed {} mentees and {} mentors",
            mentees.len(),
            mentors.len()
        );
    }

    let weights = args.weights.to_weights();
    if verbose {
        eprintln!(
            "Weights: experience {}, field {}, career {}, studies {}, objective {}",
            weights.experience,
            weights.field,
            weights.career_gap,
            weights.study_gap,
            weights.objective,
        );
    }

    let engine = PairingEngine::new(
        &mentees,
        &mentors,
        PairingConfig {
            weights: weights.clone(),
        },
    );
    let result = engine.pair();

    match format {
        OutputFormat::Text => print_text_result(&result),
        OutputFormat::Json => print_json_result(&result, &weights)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn print_text_result(result: &PairingResult) {
    if result.pairs.is_empty() {
        println!("No pairings produced.");
    } else {
        println!("Final pairings:");
        for pair in &result.pairs {
            println!(
                "  {} <--> {}  (score {})",
                pair.mentor_name, pair.mentee_name, pair.score
            );
        }
    }

    if !result.unmatched_mentees.is_empty() {
        let names: Vec<&str> = result
            .unmatched_mentees
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();
        println!("\nUnmatched mentees: {}", names.join(", "));
    }

    if !result.unmatched_mentors.is_empty() {
        let names: Vec<&str> = result
            .unmatched_mentors
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();
        println!("Unmatched mentors: {}", names.join(", "));
    }
}

fn print_json_result(result: &PairingResult, weights: &ScoreWeights) -> anyhow::Result<()> {
    let pairs: Vec<serde_json::Value> = result
        .pairs
        .iter()
        .map(|p| {
            serde_json::json!({
                "mentor": { "id": p.mentor.0, "name": p.mentor_name },
                "mentee": { "id": p.mentee.0, "name": p.mentee_name },
                "score": p.score,
            })
        })
        .collect();

    let output = serde_json::json!({
        "pairs": pairs,
        "unmatched_mentees": result
            .unmatched_mentees
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id.0, "name": name }))
            .collect::<Vec<_>>(),
        "unmatched_mentors": result
            .unmatched_mentors
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id.0, "name": name }))
            .collect::<Vec<_>>(),
        "weights": weights,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(result: &PairingResult) {
    println!("status\tmentor_id\tmentor\tmentee_id\tmentee\tscore");
    for p in &result.pairs {
        println!(
            "matched\t{}\t{}\t{}\t{}\t{}",
            p.mentor.0, p.mentor_name, p.mentee.0, p.mentee_name, p.score
        );
    }
    for (id, name) in &result.unmatched_mentees {
        println!("unmatched_mentee\t\t\t{}\t{name}\t", id.0);
    }
    for (id, name) in &result.unmatched_mentors {
        println!("unmatched_mentor\t{}\t{name}\t\t\t", id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_roster(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "name,experience,field,career_stage,studies,objectives,capacities").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn args_for(mentees: &NamedTempFile, mentors: &NamedTempFile) -> AssignArgs {
        AssignArgs {
            mentees: mentees.path().to_path_buf(),
            mentors: mentors.path().to_path_buf(),
            weights: WeightArgs {
                weight_experience: 2,
                weight_field: 2,
                weight_career: 3,
                weight_studies: 1,
                weight_objective: 3,
            },
        }
    }

    #[test]
    fn test_run_assigns_two_rosters() {
        let mentees = create_temp_roster(&[
            "Ada,3 years,software,early,bachelor,code review,",
            "Ben,1 year,biology,student,high school,lab work,",
        ]);
        let mentors = create_temp_roster(&[
            "Grace,15 years,software,senior,phd,,code review",
            "Lynn,8 years,biology,mid,master,,lab work",
        ]);

        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Tsv] {
            let result = run(args_for(&mentees, &mentors), format, false);
            assert!(result.is_ok());
        }
    }

    #[test]
    fn test_run_tolerates_empty_rosters() {
        let mentees = create_temp_roster(&[]);
        let mentors = create_temp_roster(&[]);
        let result = run(args_for(&mentees, &mentors), OutputFormat::Text, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_malformed_roster() {
        let mentees = create_temp_roster(&["Ada,3 years,software,wizard,bachelor,,"]);
        let mentors = create_temp_roster(&[]);
        let result = run(args_for(&mentees, &mentors), OutputFormat::Text, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_rejects_missing_file() {
        let mentors = create_temp_roster(&[]);
        let args = AssignArgs {
            mentees: PathBuf::from("/nonexistent/mentees.csv"),
            mentors: mentors.path().to_path_buf(),
            weights: args_for(&mentors, &mentors).weights,
        };
        let result = run(args, OutputFormat::Text, false);
        assert!(result.is_err());
    }
}
