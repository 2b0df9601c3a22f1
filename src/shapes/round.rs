//! Round shapes: circles and ellipses.

use std::f64::consts::PI;

use serde::Serialize;

use super::{Measure, positive};
use crate::error::ShapeError;

/// A circle defined by its radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] unless `radius > 0`.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    /// The radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Replaces the radius.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = positive("radius", radius)?;
        Ok(())
    }

    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.radius * factor)
    }
}

impl Measure for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// An axis-aligned ellipse defined by its two radii.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ellipse {
    rx: f64,
    ry: f64,
}

impl Ellipse {
    /// Creates an ellipse.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] unless both radii are positive.
    pub fn new(rx: f64, ry: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            rx: positive("horizontal radius", rx)?,
            ry: positive("vertical radius", ry)?,
        })
    }

    /// Horizontal radius.
    pub fn rx(&self) -> f64 {
        self.rx
    }

    /// Vertical radius.
    pub fn ry(&self) -> f64 {
        self.ry
    }

    /// Replaces both radii.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old radii.
    pub fn set_radii(&mut self, rx: f64, ry: f64) -> Result<(), ShapeError> {
        *self = Self::new(rx, ry)?;
        Ok(())
    }

    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.rx * factor, self.ry * factor)
    }
}

impl Measure for Ellipse {
    /// Ramanujan's second approximation.
    fn perimeter(&self) -> f64 {
        let p = self.rx.max(self.ry);
        let q = self.rx.min(self.ry);
        let h = ((p - q) / (p + q)).powi(2);
        PI * (p + q) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    fn area(&self) -> f64 {
        PI * self.rx * self.ry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_circle_formulas() {
        let circle = Circle::new(2.0).unwrap();
        assert!((circle.area() - 4.0 * PI).abs() < EPS);
        assert!((circle.perimeter() - 4.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_circle_rejects_non_positive() {
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(-3.0).is_err());
        assert!(Circle::new(f64::NAN).is_err());

        let mut circle = Circle::new(1.0).unwrap();
        assert!(circle.set_radius(-1.0).is_err());
        assert!((circle.radius() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ellipse_with_equal_radii_is_a_circle() {
        let ellipse = Ellipse::new(3.0, 3.0).unwrap();
        let circle = Circle::new(3.0).unwrap();
        assert!((ellipse.perimeter() - circle.perimeter()).abs() < EPS);
        assert!((ellipse.area() - circle.area()).abs() < EPS);
    }

    #[test]
    fn test_ellipse_perimeter_is_symmetric() {
        let a = Ellipse::new(5.0, 3.0).unwrap();
        let b = Ellipse::new(3.0, 5.0).unwrap();
        assert!((a.perimeter() - b.perimeter()).abs() < EPS);
        // Known value for semi-axes 5 and 3.
        assert!((a.perimeter() - 25.526_998_863).abs() < 1e-6);
    }

    #[test]
    fn test_ellipse_set_radii_keeps_old_values_on_error() {
        let mut ellipse = Ellipse::new(2.0, 1.0).unwrap();
        assert!(ellipse.set_radii(2.0, 0.0).is_err());
        assert!((ellipse.ry() - 1.0).abs() < EPS);
    }
}
