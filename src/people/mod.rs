//! People at an educational center.
//!
//! A [`Person`] carries a surname, a date of birth and a [`Role`]. Every
//! role except [`Student`] holds an [`Employment`], which is what makes a
//! person an employee with a salary and work experience.
//!
//! All date arithmetic takes an explicit `today` so reports are
//! reproducible.

pub mod census;
pub mod roster;

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PersonError;

pub use census::Census;

/// Bonuses stop growing after this many years of experience.
pub const MAX_BONUS_YEARS: u32 = 10;

/// Weekly teaching hours covered by the base salary.
pub const STANDARD_TEACHING_HOURS: u32 = 18;

/// Management bonuses stop growing after this many subordinates.
pub const MAX_BONUS_SUBORDINATES: u32 = 20;

/// Largest accepted base salary. Keeps salaries and payroll sums in range.
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Average grade at or above which a student is excellent.
pub const EXCELLENT_GRADE: f64 = 4.5;

/// Whole years from `from` to `to`, counting a year only once its
/// anniversary has passed. Never negative.
pub fn whole_years(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Start date and base salary of an employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employment {
    start_date: NaiveDate,
    base_salary: Decimal,
}

impl Employment {
    /// Creates an employment record.
    /// ## Errors
    /// Returns [`PersonError`] for a start date after `today` or a salary
    /// outside `0..=MAX_BASE_SALARY`.
    pub fn new(
        start_date: NaiveDate,
        base_salary: Decimal,
        today: NaiveDate,
    ) -> Result<Self, PersonError> {
        not_after("start date", start_date, today)?;
        if base_salary.is_sign_negative() && !base_salary.is_zero() {
            return Err(PersonError::NegativeSalary(base_salary));
        }
        if base_salary > MAX_BASE_SALARY {
            return Err(PersonError::SalaryTooLarge {
                value: base_salary,
                max: MAX_BASE_SALARY,
            });
        }
        Ok(Self {
            start_date,
            base_salary,
        })
    }

    /// First working day.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Base salary before bonuses.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Whole years worked as of `today`.
    pub fn experience(&self, today: NaiveDate) -> u32 {
        whole_years(self.start_date, today)
    }

    /// `base · rate · min(experience, 10)`.
    fn experience_bonus(&self, rate: Decimal, today: NaiveDate) -> Decimal {
        let years = self.experience(today).min(MAX_BONUS_YEARS);
        self.base_salary * rate * Decimal::from(years)
    }
}

/// Runs a laboratory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Administrator {
    laboratory: String,
    employment: Employment,
}

impl Administrator {
    /// Base salary used when none is given.
    pub const DEFAULT_SALARY: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

    /// Creates an administrator.
    /// ## Errors
    /// Returns [`PersonError::Blank`] for an empty laboratory.
    pub fn new(laboratory: impl Into<String>, employment: Employment) -> Result<Self, PersonError> {
        Ok(Self {
            laboratory: non_blank("laboratory", laboratory.into())?,
            employment,
        })
    }

    /// The laboratory.
    pub fn laboratory(&self) -> &str {
        &self.laboratory
    }

    /// `base + base·5%·min(exp, 10)`.
    pub fn salary(&self, today: NaiveDate) -> Decimal {
        self.employment.base_salary
            + self
                .employment
                .experience_bonus(Decimal::new(5, 2), today)
    }
}

/// Attends courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    faculty: String,
    group: String,
    course: u8,
    average_grade: f64,
}

impl Student {
    /// Creates a student.
    /// ## Errors
    /// Returns [`PersonError`] for blank text, a course outside `1..=6` or a
    /// grade outside `0..=5`.
    pub fn new(
        faculty: impl Into<String>,
        group: impl Into<String>,
        course: u8,
        average_grade: f64,
    ) -> Result<Self, PersonError> {
        if !(1..=6).contains(&course) {
            return Err(PersonError::CourseOutOfRange(course));
        }
        if !(0.0..=5.0).contains(&average_grade) {
            return Err(PersonError::GradeOutOfRange(average_grade));
        }
        Ok(Self {
            faculty: non_blank("faculty", faculty.into())?,
            group: non_blank("group", group.into())?,
            course,
            average_grade,
        })
    }

    /// The faculty.
    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    /// The study group.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Year of study.
    pub fn course(&self) -> u8 {
        self.course
    }

    /// Average grade on a 0–5 scale.
    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    /// Whether the average grade reaches [`EXCELLENT_GRADE`].
    pub fn is_excellent(&self) -> bool {
        self.average_grade >= EXCELLENT_GRADE
    }
}

/// Teaches at a faculty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    faculty: String,
    position: String,
    employment: Employment,
    hours_per_week: u32,
}

impl Teacher {
    /// Base salary used when none is given.
    pub const DEFAULT_SALARY: Decimal = Decimal::from_parts(60_000, 0, 0, false, 0);

    /// Creates a teacher.
    /// ## Errors
    /// Returns [`PersonError::Blank`] for an empty faculty or position.
    pub fn new(
        faculty: impl Into<String>,
        position: impl Into<String>,
        employment: Employment,
        hours_per_week: u32,
    ) -> Result<Self, PersonError> {
        Ok(Self {
            faculty: non_blank("faculty", faculty.into())?,
            position: non_blank("position", position.into())?,
            employment,
            hours_per_week,
        })
    }

    /// The faculty.
    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    /// Teaching load.
    pub fn hours_per_week(&self) -> u32 {
        self.hours_per_week
    }

    /// `base + base·3%·min(exp, 10)`, plus `base·10%·(hours − 18)/18` for
    /// overtime.
    pub fn salary(&self, today: NaiveDate) -> Decimal {
        let base = self.employment.base_salary;
        let experience = self.employment.experience_bonus(Decimal::new(3, 2), today);
        let overtime = match self.hours_per_week.checked_sub(STANDARD_TEACHING_HOURS) {
            Some(extra) if extra > 0 => {
                base * Decimal::new(1, 1) * Decimal::from(extra)
                    / Decimal::from(STANDARD_TEACHING_HOURS)
            }
            _ => Decimal::ZERO,
        };
        base + experience + overtime
    }
}

/// Manages a faculty unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manager {
    faculty: String,
    position: String,
    employment: Employment,
    subordinates: u32,
}

impl Manager {
    /// Base salary used when none is given.
    pub const DEFAULT_SALARY: Decimal = Decimal::from_parts(70_000, 0, 0, false, 0);

    /// Creates a manager.
    /// ## Errors
    /// Returns [`PersonError::Blank`] for an empty faculty or position.
    pub fn new(
        faculty: impl Into<String>,
        position: impl Into<String>,
        employment: Employment,
        subordinates: u32,
    ) -> Result<Self, PersonError> {
        Ok(Self {
            faculty: non_blank("faculty", faculty.into())?,
            position: non_blank("position", position.into())?,
            employment,
            subordinates,
        })
    }

    /// The faculty.
    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    /// Number of direct reports.
    pub fn subordinates(&self) -> u32 {
        self.subordinates
    }

    /// `base + base·4%·min(exp, 10) + base·1%·min(subordinates, 20)`.
    pub fn salary(&self, today: NaiveDate) -> Decimal {
        let base = self.employment.base_salary;
        let experience = self.employment.experience_bonus(Decimal::new(4, 2), today);
        let management = base
            * Decimal::new(1, 2)
            * Decimal::from(self.subordinates.min(MAX_BONUS_SUBORDINATES));
        base + experience + management
    }
}

/// What a person does at the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// Laboratory administrator.
    Administrator(Administrator),
    /// Student.
    Student(Student),
    /// Teacher.
    Teacher(Teacher),
    /// Manager.
    Manager(Manager),
}

impl Role {
    /// Human-readable role name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Administrator(_) => "Administrator",
            Self::Student(_) => "Student",
            Self::Teacher(_) => "Teacher",
            Self::Manager(_) => "Manager",
        }
    }
}

/// A person at the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    surname: String,
    date_of_birth: NaiveDate,
    #[serde(flatten)]
    role: Role,
}

impl Person {
    /// Creates a person.
    /// ## Errors
    /// Returns [`PersonError`] for a blank surname or a birth date after `today`.
    pub fn new(
        surname: impl Into<String>,
        date_of_birth: NaiveDate,
        role: Role,
        today: NaiveDate,
    ) -> Result<Self, PersonError> {
        not_after("date of birth", date_of_birth, today)?;
        Ok(Self {
            surname: non_blank("surname", surname.into())?,
            date_of_birth,
            role,
        })
    }

    /// The surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// The date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// The role.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Age in whole years.
    pub fn age(&self, today: NaiveDate) -> u32 {
        whole_years(self.date_of_birth, today)
    }

    /// The student record, if this person is a student.
    pub fn as_student(&self) -> Option<&Student> {
        match &self.role {
            Role::Student(student) => Some(student),
            _ => None,
        }
    }

    /// The employment record, if this person is an employee.
    pub fn employment(&self) -> Option<&Employment> {
        match &self.role {
            Role::Administrator(r) => Some(&r.employment),
            Role::Teacher(r) => Some(&r.employment),
            Role::Manager(r) => Some(&r.employment),
            Role::Student(_) => None,
        }
    }

    /// Job title, for employees.
    pub fn position(&self) -> Option<&str> {
        match &self.role {
            Role::Administrator(_) => Some("Administrator"),
            Role::Teacher(r) => Some(r.position.as_str()),
            Role::Manager(r) => Some(r.position.as_str()),
            Role::Student(_) => None,
        }
    }

    /// Years of work experience, for employees.
    pub fn experience(&self, today: NaiveDate) -> Option<u32> {
        self.employment().map(|e| e.experience(today))
    }

    /// Salary including bonuses, for employees.
    pub fn salary(&self, today: NaiveDate) -> Option<Decimal> {
        match &self.role {
            Role::Administrator(r) => Some(r.salary(today)),
            Role::Teacher(r) => Some(r.salary(today)),
            Role::Manager(r) => Some(r.salary(today)),
            Role::Student(_) => None,
        }
    }

    /// Multi-line description of everything known about the person.
    pub fn info(&self, today: NaiveDate) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", self.role.name().to_uppercase());
        let _ = writeln!(out, "Surname: {}", self.surname);
        let _ = writeln!(out, "Date of birth: {}", self.date_of_birth.format("%d.%m.%Y"));
        let _ = writeln!(out, "Age: {} years", self.age(today));
        match &self.role {
            Role::Administrator(r) => {
                let _ = writeln!(out, "Laboratory: {}", r.laboratory);
            }
            Role::Student(r) => {
                let _ = writeln!(out, "Faculty: {}", r.faculty);
                let _ = writeln!(out, "Group: {}", r.group);
                let _ = writeln!(out, "Course: {}", r.course);
                let excellent = if r.is_excellent() { " (excellent)" } else { "" };
                let _ = writeln!(out, "Average grade: {:.2}{excellent}", r.average_grade);
            }
            Role::Teacher(r) => {
                let _ = writeln!(out, "Faculty: {}", r.faculty);
                let _ = writeln!(out, "Position: {}", r.position);
            }
            Role::Manager(r) => {
                let _ = writeln!(out, "Faculty: {}", r.faculty);
                let _ = writeln!(out, "Position: {}", r.position);
            }
        }
        if let Some(employment) = self.employment() {
            let _ = writeln!(
                out,
                "Start date: {}",
                employment.start_date.format("%d.%m.%Y")
            );
            let _ = writeln!(out, "Experience: {} years", employment.experience(today));
        }
        match &self.role {
            Role::Teacher(r) => {
                let _ = writeln!(out, "Hours per week: {}", r.hours_per_week);
            }
            Role::Manager(r) => {
                let _ = writeln!(out, "Subordinates: {}", r.subordinates);
            }
            Role::Administrator(_) | Role::Student(_) => {}
        }
        if let Some(salary) = self.salary(today) {
            let _ = writeln!(out, "Salary: {salary:.2}");
        }
        out
    }

    /// One-line employee summary, for employees.
    pub fn employee_line(&self, today: NaiveDate) -> Option<String> {
        let position = self.position()?;
        let experience = self.experience(today)?;
        let salary = self.salary(today)?;
        let detail = match &self.role {
            Role::Administrator(r) => format!("Laboratory: {}", r.laboratory),
            Role::Teacher(r) => format!(
                "Faculty: {}, Hours per week: {}",
                r.faculty, r.hours_per_week
            ),
            Role::Manager(r) => {
                format!("Faculty: {}, Subordinates: {}", r.faculty, r.subordinates)
            }
            Role::Student(_) => return None,
        };
        Some(format!(
            "{}: {position}, Experience: {experience} years, Salary: {salary:.2}, {detail}",
            self.surname
        ))
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, PersonError> {
    if value.trim().is_empty() {
        Err(PersonError::Blank(field))
    } else {
        Ok(value)
    }
}

fn not_after(field: &'static str, date: NaiveDate, today: NaiveDate) -> Result<(), PersonError> {
    if date > today {
        Err(PersonError::FutureDate { field, date })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 1)
    }

    fn job(start: NaiveDate, base: i64) -> Employment {
        Employment::new(start, Decimal::from(base), today()).unwrap()
    }

    #[test]
    fn test_whole_years() {
        assert_eq!(whole_years(date(2000, 1, 1), date(2025, 1, 1)), 25);
        assert_eq!(whole_years(date(2000, 1, 2), date(2025, 1, 1)), 24);
        assert_eq!(whole_years(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(whole_years(date(2000, 2, 29), date(2025, 3, 1)), 25);
        assert_eq!(whole_years(date(2026, 1, 1), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_administrator_salary_caps_experience() {
        let admin = Administrator::new("Physics", job(date(2010, 9, 1), 55_000)).unwrap();
        // 14 years of experience, capped at 10.
        assert_eq!(admin.salary(today()), Decimal::from(82_500));
    }

    #[test]
    fn test_teacher_overtime() {
        let teacher =
            Teacher::new("IT", "Associate Professor", job(date(2005, 9, 1), 65_000), 20).unwrap();
        assert_eq!(format!("{:.2}", teacher.salary(today())), "85222.22");

        let part_time = Teacher::new("IT", "Lecturer", job(date(2016, 9, 1), 60_000), 16).unwrap();
        assert_eq!(part_time.salary(today()), Decimal::from(74_400));
    }

    #[test]
    fn test_manager_salary_caps_subordinates() {
        let manager = Manager::new("Economics", "Dean", job(date(2003, 9, 1), 90_000), 25).unwrap();
        assert_eq!(manager.salary(today()), Decimal::from(144_000));
    }

    #[test]
    fn test_student_validation() {
        assert_eq!(
            Student::new("IT", "IT-1", 0, 4.0),
            Err(PersonError::CourseOutOfRange(0))
        );
        assert!(Student::new("IT", "IT-1", 2, 5.5).is_err());
        assert_eq!(
            Student::new("IT", "  ", 2, 4.0),
            Err(PersonError::Blank("group"))
        );
        assert!(Student::new("IT", "IT-1", 2, 4.5).unwrap().is_excellent());
        assert!(!Student::new("IT", "IT-1", 2, 4.49).unwrap().is_excellent());
    }

    #[test]
    fn test_future_dates_are_rejected() {
        assert!(matches!(
            Employment::new(date(2030, 1, 1), Decimal::ONE, today()),
            Err(PersonError::FutureDate {
                field: "start date",
                ..
            })
        ));

        let student = Role::Student(Student::new("IT", "IT-1", 1, 3.0).unwrap());
        assert!(Person::new("Ivanov", date(2026, 1, 1), student, today()).is_err());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        assert!(Employment::new(date(2020, 1, 1), Decimal::from(-1), today()).is_err());
        assert!(Employment::new(date(2020, 1, 1), Decimal::ZERO, today()).is_ok());
    }

    #[test]
    fn test_huge_salary_is_rejected() {
        assert_eq!(
            Employment::new(date(2020, 1, 1), Decimal::MAX, today()),
            Err(PersonError::SalaryTooLarge {
                value: Decimal::MAX,
                max: MAX_BASE_SALARY,
            })
        );

        let employment = job(date(2000, 1, 1), 1_000_000_000);
        let teacher = Teacher::new("IT", "Professor", employment, u32::MAX).unwrap();
        assert!(teacher.salary(today()) > MAX_BASE_SALARY);
    }

    #[test]
    fn test_student_is_not_an_employee() {
        let role = Role::Student(Student::new("IT", "IT-1", 1, 3.0).unwrap());
        let person = Person::new("Kozlova", date(2004, 7, 5), role, today()).unwrap();
        assert_eq!(person.age(today()), 20);
        assert!(person.employment().is_none());
        assert!(person.salary(today()).is_none());
        assert!(person.employee_line(today()).is_none());
    }

    #[test]
    fn test_info_and_employee_line() {
        let role = Role::Manager(
            Manager::new("Economics", "Dean", job(date(2003, 9, 1), 90_000), 25).unwrap(),
        );
        let person = Person::new("Orlov", date(1975, 6, 8), role, today()).unwrap();

        let info = person.info(today());
        assert!(info.starts_with("=== MANAGER ===\n"));
        assert!(info.contains("Date of birth: 08.06.1975"));
        assert!(info.contains("Age: 49 years"));
        assert!(info.contains("Experience: 21 years"));
        assert!(info.contains("Subordinates: 25"));
        assert!(info.contains("Salary: 144000.00"));

        assert_eq!(
            person.employee_line(today()).unwrap(),
            "Orlov: Dean, Experience: 21 years, Salary: 144000.00, Faculty: Economics, Subordinates: 25"
        );
    }
}
