use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::participant::Participant;
use crate::core::roster::Roster;
use crate::core::types::{CareerStage, Role, StudyLevel};
use crate::utils::validation::{check_roster_limit, MAX_ROSTER_ROWS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid roster format: {0}")]
    InvalidFormat(String),

    #[error("Too many rows: {0} exceeds maximum allowed ({MAX_ROSTER_ROWS})")]
    TooManyRows(usize),
}

/// Column layout resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    experience: usize,
    field: usize,
    career_stage: usize,
    studies: usize,
    objective: Option<usize>,
    capacities: Option<usize>,
}

/// Parse a roster CSV file with columns:
/// name, experience, field, career_stage, studies, [objectives], [capacities]
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_roster_file(path: &Path, role: Role) -> Result<Roster, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_roster_text(&content, role)
}

/// Parse roster CSV text.
///
/// The header row is required and matched case-insensitively; blank lines
/// and `#` comments are skipped. Free-text attributes are trimmed and
/// lower-cased here, at the ingestion boundary, so the matching core can
/// compare them directly. A roster with a header and no data rows is valid
/// and yields an empty population.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header or a required field is
/// missing, a row is short, or an ordinal value is outside its known scale,
/// or `ParseError::TooManyRows` if the row limit is exceeded.
pub fn parse_roster_text(text: &str, role: Role) -> Result<Roster, ParseError> {
    let mut columns: Option<Columns> = None;
    let mut participants = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields = split_fields(line);

        let Some(cols) = columns else {
            columns = Some(resolve_columns(&fields)?);
            continue;
        };

        if check_roster_limit(participants.len()).is_some() {
            return Err(ParseError::TooManyRows(participants.len()));
        }

        participants.push(parse_row(&fields, cols, line_num)?);
    }

    if columns.is_none() {
        return Err(ParseError::InvalidFormat(
            "No header row found in roster".to_string(),
        ));
    }

    debug!(
        role = %role,
        rows = participants.len(),
        "parsed roster"
    );

    Ok(Roster::new(role, participants))
}

/// Split one CSV line into fields, honoring double quotes.
///
/// Quotes let free-text fields (objectives, capacities) contain commas;
/// a doubled quote inside a quoted field is an escaped quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn resolve_columns(header: &[String]) -> Result<Columns, ParseError> {
    let position = |names: &[&str]| -> Option<usize> {
        header.iter().position(|h| {
            let h = h.trim().to_lowercase().replace([' ', '-'], "_");
            names.contains(&h.as_str())
        })
    };

    let required = |names: &[&str], label: &str| -> Result<usize, ParseError> {
        position(names).ok_or_else(|| {
            ParseError::InvalidFormat(format!("Missing required column '{label}' in header"))
        })
    };

    Ok(Columns {
        name: required(&["name"], "name")?,
        experience: required(&["experience"], "experience")?,
        field: required(&["field"], "field")?,
        career_stage: required(&["career_stage", "careerstage"], "career_stage")?,
        studies: required(&["studies", "study_level", "studylevel"], "studies")?,
        objective: position(&["objectives", "objective"]),
        capacities: position(&["capacities", "capacity"]),
    })
}

fn parse_row(fields: &[String], cols: Columns, line_num: usize) -> Result<Participant, ParseError> {
    let get = |index: usize, label: &str| -> Result<&str, ParseError> {
        let value = fields
            .get(index)
            .map(|f| f.trim())
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!("Line {line_num} is missing the '{label}' field"))
            })?;
        if value.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty '{label}' field"
            )));
        }
        Ok(value)
    };

    let career_raw = get(cols.career_stage, "career_stage")?;
    let career_stage = CareerStage::parse(career_raw).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Invalid career stage on line {line_num}: '{career_raw}'"
        ))
    })?;

    let studies_raw = get(cols.studies, "studies")?;
    let studies = StudyLevel::parse(studies_raw).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Invalid study level on line {line_num}: '{studies_raw}'"
        ))
    })?;

    let optional = |index: Option<usize>| -> String {
        index
            .and_then(|i| fields.get(i))
            .map(|f| f.trim().to_lowercase())
            .unwrap_or_default()
    };

    let mut participant = Participant::new(
        get(cols.name, "name")?,
        get(cols.experience, "experience")?.to_lowercase(),
        get(cols.field, "field")?.to_lowercase(),
        career_stage,
        studies,
    );
    participant.objective = optional(cols.objective);
    participant.capacities = optional(cols.capacities);

    Ok(participant)
}
