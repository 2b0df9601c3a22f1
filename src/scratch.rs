//! One-off integer and table utilities.

use crate::error::ArithmeticError;

/// Step between consecutive rows of a sine table.
pub const SINE_STEP: f64 = 0.01;

/// Upper bound on sine table rows.
pub const MAX_SINE_ROWS: usize = 1_000_000;

/// Product and integer quotient of two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    /// `dividend * divisor`.
    pub product: i32,
    /// `dividend / divisor`, truncated toward zero, or the reason it failed.
    pub quotient: Result<i32, ArithmeticError>,
}

/// Multiplies and divides two integers.
/// ## Errors
/// Returns [`ArithmeticError::Overflow`] if the product does not fit `i32`.
/// A zero divisor is reported inside [`Division::quotient`].
pub fn divide(dividend: i32, divisor: i32) -> Result<Division, ArithmeticError> {
    let product = dividend
        .checked_mul(divisor)
        .ok_or(ArithmeticError::Overflow("product"))?;
    let quotient = if divisor == 0 {
        Err(ArithmeticError::DivisionByZero)
    } else {
        dividend
            .checked_div(divisor)
            .ok_or(ArithmeticError::Overflow("quotient"))
    };
    Ok(Division { product, quotient })
}

/// Rows of `(x, sin x)` from `from` while `x <= to`, stepping by [`SINE_STEP`].
///
/// Always yields at least the first row.
///
/// ## Errors
/// Returns [`ArithmeticError::RangeTooLarge`] past [`MAX_SINE_ROWS`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn sine_table(from: f64, to: f64) -> Result<Vec<(f64, f64)>, ArithmeticError> {
    // Slack absorbs rounding when the bound is a whole number of steps away.
    let steps = ((to - from) / SINE_STEP + 1e-9).floor();
    let rows = if steps.is_nan() || steps < 0.0 {
        1
    } else if steps >= MAX_SINE_ROWS as f64 {
        return Err(ArithmeticError::RangeTooLarge(MAX_SINE_ROWS));
    } else {
        steps as usize + 1
    };
    Ok((0..rows)
        .map(|i| {
            let x = from + i as f64 * SINE_STEP;
            (x, x.sin())
        })
        .collect())
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Sum of the decimal digits of `|n|`.
#[allow(clippy::cast_possible_truncation)]
pub fn digit_sum(n: i64) -> u32 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;
    while rest > 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide() {
        let division = divide(7, 2).unwrap();
        assert_eq!(division.product, 14);
        assert_eq!(division.quotient, Ok(3));

        assert_eq!(divide(-7, 2).unwrap().quotient, Ok(-3));
    }

    #[test]
    fn test_divide_by_zero() {
        let division = divide(5, 0).unwrap();
        assert_eq!(division.product, 0);
        assert_eq!(division.quotient, Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_division_is_copy() {
        let division = divide(9, 0).unwrap();
        let copy = division;
        assert_eq!(copy, division);
        assert_eq!(copy.quotient.unwrap_err(), division.quotient.unwrap_err());
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(
            divide(i32::MAX, 2),
            Err(ArithmeticError::Overflow("product"))
        );
        assert_eq!(
            divide(i32::MIN, -1).map(|d| d.quotient),
            Err(ArithmeticError::Overflow("product"))
        );
    }

    #[test]
    fn test_sine_table_includes_upper_bound() {
        let rows = sine_table(0.0, 0.1).unwrap();
        assert_eq!(rows.len(), 11);
        let (last_x, last_y) = rows[10];
        assert!((last_x - 0.1).abs() < 1e-12);
        assert!((last_y - 0.1_f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn test_sine_table_always_has_one_row() {
        let rows = sine_table(1.0, 0.0).unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].0 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sine_table_rejects_huge_ranges() {
        assert_eq!(
            sine_table(0.0, 1e12),
            Err(ArithmeticError::RangeTooLarge(MAX_SINE_ROWS))
        );
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(-48, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1 << 63);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(-1234), 10);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(i64::MIN), 89);
    }
}
