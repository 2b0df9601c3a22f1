//! Roster loading for the educational center report.
//!
//! A roster is a JSON array of [`PersonRecord`]s. The built-in sample is
//! compiled into the binary; `--roster FILE` replaces it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::people::Person;
use crate::people::roster::PersonRecord;

const SAMPLE_ROSTER: &str = include_str!("people/sample_roster.json");

/// Reads and validates the roster at `path` as of `today`.
///
/// ## Errors
/// Returns an error if:
/// - The file cannot be read
/// - The file is not a JSON array of roster records
/// - Any record fails validation
pub fn load_roster(path: &Path, today: NaiveDate) -> Result<Vec<Person>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let people = parse_roster(&text, today)
        .with_context(|| format!("invalid roster {}", path.display()))?;
    debug!(path = %path.display(), count = people.len(), "loaded roster");
    Ok(people)
}

/// The built-in ten-person sample roster.
///
/// ## Errors
/// Returns an error if a sample date lies after `today`.
pub fn sample_roster(today: NaiveDate) -> Result<Vec<Person>> {
    parse_roster(SAMPLE_ROSTER, today).context("invalid built-in roster")
}

/// Parses and validates roster JSON as of `today`.
///
/// ## Errors
/// Returns an error naming the first record that fails to parse or validate.
pub fn parse_roster(text: &str, today: NaiveDate) -> Result<Vec<Person>> {
    let records: Vec<PersonRecord> =
        serde_json::from_str(text).context("failed to parse roster JSON")?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let surname = record.surname.clone();
            record
                .into_person(today)
                .with_context(|| format!("record {} ({surname})", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_sample_roster_loads() {
        let people = sample_roster(today()).unwrap();
        assert_eq!(people.len(), 10);
        assert_eq!(people[0].surname(), "Ivanov");
        assert_eq!(people[9].surname(), "Orlov");
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"surname": "Petrova", "date_of_birth": "1990-08-22",
                 "role": "administrator", "laboratory": "Physics",
                 "start_date": "2015-03-15"}}]"#
        )
        .unwrap();

        let people = load_roster(file.path(), today()).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(
            people[0].salary(today()),
            Some(rust_decimal::Decimal::from(72_500))
        );
    }

    #[test]
    fn test_load_roster_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster(&dir.path().join("absent.json"), today()).unwrap_err();
        assert!(err.to_string().contains("failed to read roster"));
    }

    #[test]
    fn test_parse_roster_reports_bad_record() {
        let text = r#"[{"surname": "Kozlova", "date_of_birth": "2004-07-05",
                        "role": "student", "faculty": "Economics",
                        "group": "EC-22-2", "course": 9}]"#;
        let err = parse_roster(text, today()).unwrap_err();
        assert!(format!("{err:#}").contains("record 1 (Kozlova)"));
    }

    #[test]
    fn test_parse_roster_rejects_huge_salary() {
        let text = r#"[{"surname": "Orlov", "date_of_birth": "1975-06-08",
                        "role": "manager", "faculty": "Economics", "position": "Dean",
                        "start_date": "2003-09-01", "base_salary": 1000000000000000,
                        "subordinates": 25}]"#;
        let err = parse_roster(text, today()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("record 1 (Orlov)"));
        assert!(message.contains("base salary must be at most 1000000000"));
    }

    #[test]
    fn test_parse_roster_rejects_invalid_json() {
        assert!(parse_roster("{not json", today()).is_err());
    }
}
