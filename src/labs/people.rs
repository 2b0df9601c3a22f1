//! Educational center report.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::ReportFormat;
use crate::console::Console;
use crate::console::format::{banner, count_noun};
use crate::error::Result;
use crate::people::{Census, Person};

#[derive(Debug, Serialize)]
struct Output<'a> {
    today: NaiveDate,
    people: &'a [Person],
    census: &'a Census,
}

/// Prints the full report for `people` as of `today`.
///
/// ## Errors
/// Returns an error if the console fails or the JSON cannot be built.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    people: &[Person],
    today: NaiveDate,
    format: ReportFormat,
) -> Result<()> {
    info!(count = people.len(), %today, "building educational center report");
    let census = Census::of(people, today);

    if format == ReportFormat::Json {
        let output = Output {
            today,
            people,
            census: &census,
        };
        return console.line(serde_json::to_string_pretty(&output)?);
    }

    console.line(banner("Educational center"))?;
    console.line(format_args!("Report date: {}", today.format("%d.%m.%Y")))?;
    for person in people {
        console.blank()?;
        console.line(person.info(today).trim_end())?;
    }

    console.blank()?;
    console.line(banner("Statistics"))?;
    console.line(format_args!("Total people: {}", census.total))?;
    console.line(format_args!("Administrators: {}", census.administrators))?;
    console.line(format_args!("Students: {}", census.students))?;
    console.line(format_args!("Teachers: {}", census.teachers))?;
    console.line(format_args!("Managers: {}", census.managers))?;

    console.blank()?;
    console.line(banner("Employees"))?;
    for line in people.iter().filter_map(|p| p.employee_line(today)) {
        console.line(line)?;
    }
    console.line(format_args!(
        "Total salary of employees: {:.2}",
        census.total_salary
    ))?;
    match census.average_age {
        Some(age) => console.line(format_args!("Average age: {age:.1} years"))?,
        None => console.line("Average age: n/a")?,
    }

    console.blank()?;
    console.line(banner("Excellent students"))?;
    if census.excellent_students.is_empty() {
        console.line("None")?;
    }
    for student in &census.excellent_students {
        console.line(format_args!(
            "{} ({}): {:.2}",
            student.surname, student.group, student.average_grade
        ))?;
    }

    console.blank()?;
    console.line(banner("Most experienced employees"))?;
    for (rank, veteran) in census.most_experienced.iter().enumerate() {
        console.line(format_args!(
            "{}. {}: {}",
            rank + 1,
            veteran.surname,
            count_noun(veteran.experience as usize, "year", "years")
        ))?;
    }
    Ok(())
}
