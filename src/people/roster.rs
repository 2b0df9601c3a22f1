//! Serialized roster records.
//!
//! A roster is a JSON array of [`PersonRecord`]s tagged by `"role"`.
//! Optional numeric fields fall back to the role defaults. Records are
//! plain data until [`PersonRecord::into_person`] validates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{Administrator, Employment, Manager, Person, Role, Student, Teacher};
use crate::error::PersonError;

/// One person as written in a roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    /// Surname.
    pub surname: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    /// Role-specific fields.
    #[serde(flatten)]
    pub role: RoleRecord,
}

/// Role-specific fields of a [`PersonRecord`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleRecord {
    /// An administrator.
    Administrator {
        /// Laboratory name.
        laboratory: String,
        /// First working day.
        start_date: NaiveDate,
        /// Base salary, defaults to 50 000.
        #[serde(default)]
        base_salary: Option<Decimal>,
    },
    /// A student.
    Student {
        /// Faculty name.
        faculty: String,
        /// Study group.
        group: String,
        /// Year of study, defaults to 1.
        #[serde(default = "default_course")]
        course: u8,
        /// Average grade, defaults to 0.
        #[serde(default)]
        average_grade: f64,
    },
    /// A teacher.
    Teacher {
        /// Faculty name.
        faculty: String,
        /// Job title.
        position: String,
        /// First working day.
        start_date: NaiveDate,
        /// Base salary, defaults to 60 000.
        #[serde(default)]
        base_salary: Option<Decimal>,
        /// Weekly hours, defaults to 18.
        #[serde(default = "default_hours")]
        hours_per_week: u32,
    },
    /// A manager.
    Manager {
        /// Faculty name.
        faculty: String,
        /// Job title.
        position: String,
        /// First working day.
        start_date: NaiveDate,
        /// Base salary, defaults to 70 000.
        #[serde(default)]
        base_salary: Option<Decimal>,
        /// Direct reports, defaults to 0.
        #[serde(default)]
        subordinates: u32,
    },
}

fn default_course() -> u8 {
    1
}

fn default_hours() -> u32 {
    super::STANDARD_TEACHING_HOURS
}

impl PersonRecord {
    /// Validates the record as of `today`.
    /// ## Errors
    /// Returns the first [`PersonError`] found.
    pub fn into_person(self, today: NaiveDate) -> Result<Person, PersonError> {
        let role = match self.role {
            RoleRecord::Administrator {
                laboratory,
                start_date,
                base_salary,
            } => {
                let job = Employment::new(
                    start_date,
                    base_salary.unwrap_or(Administrator::DEFAULT_SALARY),
                    today,
                )?;
                Role::Administrator(Administrator::new(laboratory, job)?)
            }
            RoleRecord::Student {
                faculty,
                group,
                course,
                average_grade,
            } => Role::Student(Student::new(faculty, group, course, average_grade)?),
            RoleRecord::Teacher {
                faculty,
                position,
                start_date,
                base_salary,
                hours_per_week,
            } => {
                let job = Employment::new(
                    start_date,
                    base_salary.unwrap_or(Teacher::DEFAULT_SALARY),
                    today,
                )?;
                Role::Teacher(Teacher::new(faculty, position, job, hours_per_week)?)
            }
            RoleRecord::Manager {
                faculty,
                position,
                start_date,
                base_salary,
                subordinates,
            } => {
                let job = Employment::new(
                    start_date,
                    base_salary.unwrap_or(Manager::DEFAULT_SALARY),
                    today,
                )?;
                Role::Manager(Manager::new(faculty, position, job, subordinates)?)
            }
        };
        Person::new(self.surname, self.date_of_birth, role, today)
    }
}
