//! End-to-end tests for the command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_roster(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(
        file,
        "name,experience,field,career_stage,studies,objectives,capacities"
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn sample_mentees() -> NamedTempFile {
    write_roster(&[
        "Ada,3 years,software,early,bachelor,code review,",
        "Ben,1 year,biology,student,high school,lab work,",
    ])
}

fn sample_mentors() -> NamedTempFile {
    write_roster(&[
        "Grace,15 years,software,senior,phd,,\"code review, architecture\"",
        "Lynn,8 years,biology,mid,master,,lab work",
    ])
}

#[test]
fn test_assign_text_output() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace <--> Ada"))
        .stdout(predicate::str::contains("Lynn <--> Ben"));
}

#[test]
fn test_assign_json_output() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    let output = Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["pairs"].as_array().unwrap().len(), 2);
    assert!(parsed["unmatched_mentees"].as_array().unwrap().is_empty());
    assert_eq!(parsed["weights"]["field"], 2);
}

#[test]
fn test_assign_tsv_output() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "status\tmentor_id\tmentor\tmentee_id\tmentee\tscore",
        ))
        .stdout(predicate::str::contains("matched\t0\tGrace\t0\tAda"));
}

#[test]
fn test_assign_reports_unmatched() {
    let mentees = write_roster(&[
        "Ada,3 years,software,early,bachelor,,",
        "Ben,3 years,software,early,bachelor,,",
        "Cyn,3 years,software,early,bachelor,,",
    ]);
    let mentors = write_roster(&["Grace,15 years,software,senior,phd,,"]);

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unmatched mentees:"));
}

#[test]
fn test_assign_empty_rosters_succeed() {
    let mentees = write_roster(&[]);
    let mentors = write_roster(&[]);

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No pairings produced."));
}

#[test]
fn test_assign_weight_flags_change_outcome() {
    // With the field weight boosted, Ada must pair with the same-field
    // mentor even though the other mentor covers her objective.
    let mentees = write_roster(&["Ada,3 years,software,early,bachelor,code review,"]);
    let mentors = write_roster(&[
        "Grace,15 years,biology,senior,phd,,code review",
        "Lynn,8 years,software,mid,master,,",
    ]);

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .args(["--weight-field", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lynn <--> Ada"));
}

#[test]
fn test_assign_rejects_weight_out_of_range() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .args(["--weight-field", "101"])
        .assert()
        .failure();
}

#[test]
fn test_assign_rejects_malformed_roster() {
    let mentees = write_roster(&["Ada,3 years,software,wizard,bachelor,,"]);
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("wizard"));
}

#[test]
fn test_assign_rejects_missing_file() {
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg("/nonexistent/mentees.csv")
        .arg(mentors.path())
        .assert()
        .failure();
}

#[test]
fn test_rank_text_output() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("rank")
        .arg(mentees.path())
        .arg(mentors.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mentee preferences"))
        .stdout(predicate::str::contains("Mentor preferences"));
}

#[test]
fn test_rank_json_output() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    let output = Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("rank")
        .arg(mentees.path())
        .arg(mentors.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let mentee_prefs = parsed["mentee_preferences"].as_array().unwrap();
    assert_eq!(mentee_prefs.len(), 2);
    // Each mentee ranks every mentor
    assert_eq!(mentee_prefs[0]["ranking"].as_array().unwrap().len(), 2);
    // The attributes behind each ranking are embedded
    assert_eq!(mentee_prefs[0]["participant"]["name"], "Ada");
    assert_eq!(mentee_prefs[0]["participant"]["field"], "software");
    let mentor_prefs = parsed["mentor_preferences"].as_array().unwrap();
    assert_eq!(
        mentor_prefs[0]["participant"]["capacities"],
        "code review, architecture"
    );
}

#[test]
fn test_verbose_flag_reports_roster_sizes() {
    let mentees = sample_mentees();
    let mentors = sample_mentors();

    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("assign")
        .arg(mentees.path())
        .arg(mentors.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed 2 mentees and 2 mentors"));
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("pair-solver")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("rank"))
        .stdout(predicate::str::contains("serve"));
}
