//! Error types for the edu-labs exercises.
//!
//! This module defines all error types used throughout the application,
//! organized by exercise: console input, shapes, distances, equations,
//! progressions, people and integer arithmetic.

use thiserror::Error;

/// Errors raised while reading values from the console.
#[derive(Debug, Error)]
pub enum InputError {
    /// The line could not be parsed as the expected value.
    #[error("'{input}' is not a valid {expected}")]
    Parse {
        /// The offending text, trimmed.
        input: String,
        /// Human-readable name of the expected value.
        expected: &'static str,
    },

    /// The line held the wrong number of values.
    #[error("expected {expected} values, got {actual}")]
    WrongArity {
        /// Number of values the prompt asked for.
        expected: usize,
        /// Number of values found on the line.
        actual: usize,
    },

    /// Standard input was closed while a prompt was pending.
    #[error("input closed before a value was entered")]
    Eof,
}

/// Errors related to shape construction and mutation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// A linear dimension was zero, negative or not finite.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive {
        /// The dimension that failed validation.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Three sides that cannot close a triangle.
    #[error("sides {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },

    /// A rhombus angle outside the open interval (0, 180).
    #[error("rhombus angle must lie strictly between 0 and 180 degrees, got {0}")]
    AngleOutOfRange(f64),

    /// A rotation angle that is NaN or infinite.
    #[error("rotation angle must be a finite number, got {0}")]
    NonFiniteAngle(f64),

    /// A scale factor that is not a finite positive number.
    #[error("scale factor must be a positive number, got {0}")]
    InvalidScaleFactor(f64),

    /// The shape kind does not support the requested capability.
    #[error("{kind} does not support {capability}")]
    Unsupported {
        /// Shape kind name.
        kind: &'static str,
        /// Capability name.
        capability: &'static str,
    },
}

/// Errors related to feet/inches distances.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistanceError {
    /// Negative feet.
    #[error("feet must not be negative, got {0}")]
    NegativeFeet(i32),

    /// Negative or non-finite inches.
    #[error("inches must be a non-negative number, got {0}")]
    InvalidInches(f64),

    /// A length whose whole feet do not fit an `i32`.
    #[error("distance of {0} inches is longer than {max} feet", max = i32::MAX)]
    TooLong(f64),
}

/// Errors related to the quadratic solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadraticError {
    /// The leading coefficient is zero.
    #[error("coefficient a must not be zero (the equation is not quadratic)")]
    NotQuadratic,

    /// A coefficient is NaN or infinite.
    #[error("coefficient {name} must be a finite number, got {value}")]
    NonFinite {
        /// Coefficient name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An intermediate result overflowed `f64`.
    #[error("the {0} is too large to represent")]
    OutOfRange(&'static str),
}

/// Errors related to arithmetic progressions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// The element index is below 1.
    #[error("element index must be at least 1, got {0}")]
    IndexTooSmall(i64),

    /// The element index does not fit a `u32`.
    #[error("element index must be at most {max}, got {0}", max = u32::MAX)]
    IndexTooLarge(i64),
}

/// Errors related to people at the educational center.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PersonError {
    /// A required text field was empty.
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// A date lies after the reference date.
    #[error("{field} {date} lies in the future")]
    FutureDate {
        /// Which date failed.
        field: &'static str,
        /// The rejected date.
        date: chrono::NaiveDate,
    },

    /// Student course outside `1..=6`.
    #[error("course must be between 1 and 6, got {0}")]
    CourseOutOfRange(u8),

    /// Student average grade outside `0..=5`.
    #[error("average grade must be between 0 and 5, got {0}")]
    GradeOutOfRange(f64),

    /// Negative base salary.
    #[error("base salary must not be negative, got {0}")]
    NegativeSalary(rust_decimal::Decimal),

    /// Base salary above the supported maximum.
    #[error("base salary must be at most {max}, got {value}")]
    SalaryTooLarge {
        /// The rejected salary.
        value: rust_decimal::Decimal,
        /// The largest accepted salary.
        max: rust_decimal::Decimal,
    },
}

/// Errors from the integer scratch utilities.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Integer division by zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// The result does not fit the integer type.
    #[error("{0} overflows")]
    Overflow(&'static str),

    /// A table range that would produce too many rows.
    #[error("range produces more than {0} rows")]
    RangeTooLarge(usize),
}

/// A unified error type for the entire application.
#[derive(Debug, Error)]
pub enum Error {
    /// Console input error.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Shape error.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Distance error.
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// Quadratic solver error.
    #[error(transparent)]
    Quadratic(#[from] QuadraticError),

    /// Progression error.
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    /// Person validation error.
    #[error(transparent)]
    Person(#[from] PersonError),

    /// Integer arithmetic error.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether an interactive prompt should ask again after this error.
    ///
    /// Parse failures and invariant violations are recoverable; a closed
    /// input stream or an IO failure is not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Input(InputError::Eof) | Self::Serialization(_) | Self::Io(_) => false,
            Self::Input(_)
            | Self::Shape(_)
            | Self::Distance(_)
            | Self::Quadratic(_)
            | Self::Progression(_)
            | Self::Person(_)
            | Self::Arithmetic(_) => true,
        }
    }

    /// Whether `main` should report this error as a message and exit cleanly.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Serialization(_) | Self::Io(_))
    }
}

/// A specialized Result type for edu-labs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::NonPositive {
            field: "radius",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "radius must be a positive number, got -1");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ShapeError::InvalidScaleFactor(0.0).into();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::InvalidScaleFactor(_))
        ));
    }

    #[test]
    fn test_recoverable_classification() {
        let parse: Error = InputError::Parse {
            input: "abc".to_string(),
            expected: "number",
        }
        .into();
        assert!(parse.is_recoverable());
        assert!(parse.is_user_facing());

        let eof: Error = InputError::Eof.into();
        assert!(!eof.is_recoverable());
        assert!(eof.is_user_facing());

        let io: Error = std::io::Error::other("broken pipe").into();
        assert!(!io.is_recoverable());
        assert!(!io.is_user_facing());
    }

    #[test]
    fn test_transparent_display() {
        let err: Error = QuadraticError::NotQuadratic.into();
        assert_eq!(
            err.to_string(),
            "coefficient a must not be zero (the equation is not quadratic)"
        );
    }
}
