//! Imperial distances in feet and inches.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::DistanceError;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Distances closer than this many inches compare equal.
pub const TOLERANCE: f64 = 0.001;

/// A length of whole feet plus inches in `[0, 12)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Distance {
    feet: i32,
    inches: f64,
}

impl Distance {
    /// Creates a distance, carrying whole feet out of `inches`.
    /// ## Errors
    /// Returns [`DistanceError`] for negative feet, negative or non-finite
    /// inches, or a total too long to count in whole `i32` feet.
    pub fn new(feet: i32, inches: f64) -> Result<Self, DistanceError> {
        if feet < 0 {
            return Err(DistanceError::NegativeFeet(feet));
        }
        if !inches.is_finite() || inches < 0.0 {
            return Err(DistanceError::InvalidInches(inches));
        }
        Self::try_from_total_inches(f64::from(feet) * INCHES_PER_FOOT + inches)
    }

    /// Whole feet.
    pub fn feet(&self) -> i32 {
        self.feet
    }

    /// Remaining inches, always below 12.
    pub fn inches(&self) -> f64 {
        self.inches
    }

    /// The whole distance expressed in inches.
    pub fn total_inches(&self) -> f64 {
        f64::from(self.feet) * INCHES_PER_FOOT + self.inches
    }

    /// Sum of two distances.
    /// ## Errors
    /// Returns [`DistanceError::TooLong`] when the whole feet overflow `i32`.
    pub fn checked_add(self, rhs: Self) -> Result<Self, DistanceError> {
        Self::try_from_total_inches(self.total_inches() + rhs.total_inches())
    }

    /// Clamps negative totals to zero.
    #[allow(clippy::cast_possible_truncation)]
    fn try_from_total_inches(total: f64) -> Result<Self, DistanceError> {
        let total = total.max(0.0);
        let feet = (total / INCHES_PER_FOOT).floor();
        if feet > f64::from(i32::MAX) {
            return Err(DistanceError::TooLong(total));
        }
        Ok(Self {
            feet: feet as i32,
            inches: total - feet * INCHES_PER_FOOT,
        })
    }
}

impl Add for Distance {
    type Output = Result<Self, DistanceError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

/// Subtraction saturates at zero.
impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // Never longer than `self`, so the feet always fit.
        Self::try_from_total_inches(self.total_inches() - rhs.total_inches()).unwrap_or(self)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        (self.total_inches() - other.total_inches()).abs() < TOLERANCE
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.total_inches().partial_cmp(&other.total_inches())
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'-{}\"", self.feet, self.inches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(feet: i32, inches: f64) -> Distance {
        Distance::new(feet, inches).unwrap()
    }

    #[test]
    fn test_new_normalizes_inches() {
        let distance = d(1, 30.0);
        assert_eq!(distance.feet(), 3);
        assert!((distance.inches() - 6.0).abs() < 1e-12);
        assert_eq!(distance.to_string(), "3'-6\"");
    }

    #[test]
    fn test_new_rejects_negative_values() {
        assert_eq!(Distance::new(-1, 0.0), Err(DistanceError::NegativeFeet(-1)));
        assert!(Distance::new(0, -0.5).is_err());
        assert!(Distance::new(0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_addition_carries() {
        let sum = (d(5, 10.0) + d(1, 4.0)).unwrap();
        assert_eq!(sum.feet(), 7);
        assert!((sum.inches() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_addition_overflow_is_an_error() {
        let longest = d(i32::MAX, 0.0);
        assert_eq!(longest.feet(), i32::MAX);
        assert!(matches!(longest + longest, Err(DistanceError::TooLong(_))));
        assert!(longest.checked_add(d(0, 11.5)).is_ok());
        assert!(longest.checked_add(d(1, 0.0)).is_err());
    }

    #[test]
    fn test_new_rejects_totals_past_i32_feet() {
        assert!(matches!(
            Distance::new(i32::MAX, 24.0),
            Err(DistanceError::TooLong(_))
        ));
        assert!(matches!(
            Distance::new(0, 1e300),
            Err(DistanceError::TooLong(_))
        ));
    }

    #[test]
    fn test_subtraction_clamps_at_zero() {
        let diff = d(1, 0.0) - d(2, 0.0);
        assert_eq!(diff.feet(), 0);
        assert!(diff.inches().abs() < 1e-12);

        let diff = d(3, 2.0) - d(1, 5.0);
        assert_eq!(diff, d(1, 9.0));
    }

    #[test]
    fn test_equality_uses_tolerance() {
        assert_eq!(d(1, 0.0), d(0, 12.0005));
        assert_ne!(d(1, 0.0), d(1, 0.01));
    }

    #[test]
    fn test_ordering() {
        assert!(d(1, 0.0) < d(1, 0.5));
        assert!(d(2, 0.0) > d(1, 11.9));
        assert!(d(1, 0.0) <= d(0, 12.0005));
        assert!(d(1, 0.0) >= d(0, 12.0005));
        assert!(!(d(1, 0.0) < d(0, 12.0005)));
    }
}
