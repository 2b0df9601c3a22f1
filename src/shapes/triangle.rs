//! Triangles given by three side lengths.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::{Measure, positive};
use crate::error::ShapeError;

/// A triangle that always satisfies the strict triangle inequality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Creates a triangle from three sides.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] for a bad side and
    /// [`ShapeError::TriangleInequality`] if the sides cannot close.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        let a = positive("side a", a)?;
        let b = positive("side b", b)?;
        let c = positive("side c", c)?;
        if !is_valid(a, b, c) {
            return Err(ShapeError::TriangleInequality { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Creates an equilateral triangle.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] unless `side > 0`.
    pub fn equilateral(side: f64) -> Result<Self, ShapeError> {
        Self::new(side, side, side)
    }

    /// Side a.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Side b.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Side c.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Replaces side a, checked against the current b and c.
    /// ## Errors
    /// Returns an error and leaves the triangle unchanged.
    pub fn set_a(&mut self, a: f64) -> Result<(), ShapeError> {
        *self = Self::new(a, self.b, self.c)?;
        Ok(())
    }

    /// Replaces side b, checked against the current a and c.
    /// ## Errors
    /// Returns an error and leaves the triangle unchanged.
    pub fn set_b(&mut self, b: f64) -> Result<(), ShapeError> {
        *self = Self::new(self.a, b, self.c)?;
        Ok(())
    }

    /// Replaces side c, checked against the current a and b.
    /// ## Errors
    /// Returns an error and leaves the triangle unchanged.
    pub fn set_c(&mut self, c: f64) -> Result<(), ShapeError> {
        *self = Self::new(self.a, self.b, c)?;
        Ok(())
    }

    /// Orders two triangles by area.
    pub fn cmp_by_area(&self, other: &Self) -> Ordering {
        self.area().total_cmp(&other.area())
    }

    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.a * factor, self.b * factor, self.c * factor)
    }
}

impl Measure for Triangle {
    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Heron's formula.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "a={:.p$}, b={:.p$}, c={:.p$}",
                self.a, self.b, self.c
            ),
            None => write!(f, "a={}, b={}, c={}", self.a, self.b, self.c),
        }
    }
}

/// Whether three sides satisfy the strict triangle inequality.
pub fn is_valid(a: f64, b: f64, c: f64) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && a + c > b && b + c > a
}

/// Sorts triangles by ascending area. Equal areas keep their input order.
pub fn sort_by_area(triangles: &mut [Triangle]) {
    triangles.sort_by(Triangle::cmp_by_area);
}
