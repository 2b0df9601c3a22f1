//! Aggregate statistics over the people at the center.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Person, Role};

/// How many employees the experience ranking lists.
pub const TOP_EXPERIENCED: usize = 3;

/// A student whose average reaches the excellence threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcellentStudent {
    /// Surname.
    pub surname: String,
    /// Study group.
    pub group: String,
    /// Average grade.
    pub average_grade: f64,
}

/// An employee in the experience ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Veteran {
    /// Surname.
    pub surname: String,
    /// Whole years of experience.
    pub experience: u32,
}

/// Head counts, payroll and rankings for a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Census {
    /// Everyone.
    pub total: usize,
    /// Administrators.
    pub administrators: usize,
    /// Students.
    pub students: usize,
    /// Teachers.
    pub teachers: usize,
    /// Managers.
    pub managers: usize,
    /// Sum of employee salaries.
    pub total_salary: Decimal,
    /// Mean age, absent for an empty roster.
    pub average_age: Option<f64>,
    /// Students at or above the excellence threshold, in roster order.
    pub excellent_students: Vec<ExcellentStudent>,
    /// Most experienced employees, longest first; ties keep roster order.
    pub most_experienced: Vec<Veteran>,
}

impl Census {
    /// Computes the census of `people` as of `today`.
    #[allow(clippy::cast_precision_loss)]
    pub fn of(people: &[Person], today: NaiveDate) -> Self {
        let count = |pred: fn(&Role) -> bool| people.iter().filter(|p| pred(p.role())).count();

        let total_salary: Decimal = people.iter().filter_map(|p| p.salary(today)).sum();

        let average_age = (!people.is_empty()).then(|| {
            let sum: u64 = people.iter().map(|p| u64::from(p.age(today))).sum();
            sum as f64 / people.len() as f64
        });

        let excellent_students = people
            .iter()
            .filter_map(|p| {
                p.as_student()
                    .filter(|s| s.is_excellent())
                    .map(|s| ExcellentStudent {
                        surname: p.surname().to_string(),
                        group: s.group().to_string(),
                        average_grade: s.average_grade(),
                    })
            })
            .collect();

        let mut veterans: Vec<Veteran> = people
            .iter()
            .filter_map(|p| {
                p.experience(today).map(|experience| Veteran {
                    surname: p.surname().to_string(),
                    experience,
                })
            })
            .collect();
        veterans.sort_by(|a, b| b.experience.cmp(&a.experience));
        veterans.truncate(TOP_EXPERIENCED);

        Self {
            total: people.len(),
            administrators: count(|r| matches!(r, Role::Administrator(_))),
            students: count(|r| matches!(r, Role::Student(_))),
            teachers: count(|r| matches!(r, Role::Teacher(_))),
            managers: count(|r| matches!(r, Role::Manager(_))),
            total_salary,
            average_age,
            excellent_students,
            most_experienced: veterans,
        }
    }
}
