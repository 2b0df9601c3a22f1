//! Arithmetic progressions: `aₙ = a₁ + (n − 1)·d`.

use crate::error::ProgressionError;

/// A progression's first element and the index of the element wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticProgression {
    first: f64,
    index: u32,
}

impl ArithmeticProgression {
    /// Creates a progression query.
    /// ## Errors
    /// Returns [`ProgressionError::IndexTooSmall`] unless `index >= 1`, and
    /// [`ProgressionError::IndexTooLarge`] past `u32::MAX`.
    pub fn new(first: f64, index: i64) -> Result<Self, ProgressionError> {
        if index < 1 {
            return Err(ProgressionError::IndexTooSmall(index));
        }
        let index = u32::try_from(index).map_err(|_| ProgressionError::IndexTooLarge(index))?;
        Ok(Self { first, index })
    }

    /// The first element.
    pub fn first(&self) -> f64 {
        self.first
    }

    /// The requested index, 1-based.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The requested element for common difference `difference`.
    pub fn element(&self, difference: f64) -> f64 {
        self.first + f64::from(self.index - 1) * difference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element() {
        let progression = ArithmeticProgression::new(1.0, 5).unwrap();
        assert!((progression.element(2.0) - 9.0).abs() < f64::EPSILON);
        assert!((progression.element(-0.5) - -1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_element_ignores_difference() {
        let progression = ArithmeticProgression::new(4.5, 1).unwrap();
        assert!((progression.element(100.0) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_index_below_one_is_rejected() {
        assert_eq!(
            ArithmeticProgression::new(1.0, 0),
            Err(ProgressionError::IndexTooSmall(0))
        );
        assert_eq!(
            ArithmeticProgression::new(1.0, -3),
            Err(ProgressionError::IndexTooSmall(-3))
        );
    }

    #[test]
    fn test_index_above_u32_is_too_large() {
        assert_eq!(
            ArithmeticProgression::new(1.0, 5_000_000_000),
            Err(ProgressionError::IndexTooLarge(5_000_000_000))
        );
        let last = ArithmeticProgression::new(0.0, i64::from(u32::MAX)).unwrap();
        assert_eq!(last.index(), u32::MAX);
    }
}
