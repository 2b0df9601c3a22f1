//! Real roots of `ax² + bx + c = 0`.

use crate::error::QuadraticError;

/// The real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Negative discriminant.
    None,
    /// Zero discriminant.
    One(f64),
    /// Positive discriminant; `x1 = (-b - √D) / 2a`, `x2 = (-b + √D) / 2a`.
    Two(f64, f64),
}

impl Roots {
    /// Number of distinct real roots.
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }
}

/// Solves `ax² + bx + c = 0` over the reals.
/// ## Errors
/// Returns [`QuadraticError::NotQuadratic`] when `a == 0` and
/// [`QuadraticError::NonFinite`] for NaN or infinite coefficients.
/// Returns [`QuadraticError::OutOfRange`] when the discriminant or a root
/// overflows `f64`.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Roots, QuadraticError> {
    for (name, value) in [("a", a), ("b", b), ("c", c)] {
        if !value.is_finite() {
            return Err(QuadraticError::NonFinite { name, value });
        }
    }
    if a == 0.0 {
        return Err(QuadraticError::NotQuadratic);
    }

    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() {
        return Err(QuadraticError::OutOfRange("discriminant"));
    }
    let roots = if discriminant < 0.0 {
        Roots::None
    } else if discriminant == 0.0 {
        Roots::One(-b / (2.0 * a))
    } else {
        let sqrt_d = discriminant.sqrt();
        Roots::Two((-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a))
    };
    let finite = match roots {
        Roots::None => true,
        Roots::One(x) => x.is_finite(),
        Roots::Two(x1, x2) => x1.is_finite() && x2.is_finite(),
    };
    if !finite {
        return Err(QuadraticError::OutOfRange("root"));
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_roots() {
        assert_eq!(solve(1.0, -3.0, 2.0), Ok(Roots::Two(1.0, 2.0)));
    }

    #[test]
    fn test_one_root() {
        let roots = solve(1.0, 2.0, 1.0).unwrap();
        assert_eq!(roots, Roots::One(-1.0));
        assert_eq!(roots.count(), 1);
    }

    #[test]
    fn test_no_real_roots() {
        let roots = solve(1.0, 0.0, 1.0).unwrap();
        assert_eq!(roots, Roots::None);
        assert_eq!(roots.count(), 0);
    }

    #[test]
    fn test_not_quadratic() {
        assert_eq!(solve(0.0, 2.0, 1.0), Err(QuadraticError::NotQuadratic));
        assert!(matches!(
            solve(1.0, f64::NAN, 1.0),
            Err(QuadraticError::NonFinite { name: "b", .. })
        ));
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        assert_eq!(
            solve(1.0, 1e200, 1.0),
            Err(QuadraticError::OutOfRange("discriminant"))
        );
        assert_eq!(
            solve(1e-310, 1.0, 0.0),
            Err(QuadraticError::OutOfRange("root"))
        );
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_formula_order() {
        // x1 uses -√D, so with a < 0 it is the larger root.
        assert_eq!(solve(-1.0, 3.0, -2.0), Ok(Roots::Two(2.0, 1.0)));
    }
}
