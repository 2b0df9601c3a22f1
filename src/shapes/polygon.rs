//! Quadrilaterals: squares, rectangles and rhombi.

use serde::Serialize;

use super::{Measure, positive};
use crate::error::ShapeError;

/// A square defined by its side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Creates a square.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] unless `side > 0`.
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side: positive("side", side)?,
        })
    }

    /// The side length.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Replaces the side.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old side.
    pub fn set_side(&mut self, side: f64) -> Result<(), ShapeError> {
        self.side = positive("side", side)?;
        Ok(())
    }

    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.side * factor)
    }
}

impl Measure for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// A rectangle defined by width and height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] unless both sides are positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    /// The width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Replaces the width.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old width.
    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.width = positive("width", width)?;
        Ok(())
    }

    /// Replaces the height.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old height.
    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.height = positive("height", height)?;
        Ok(())
    }

    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl Measure for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A rhombus defined by its side and one interior angle in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rhombus {
    side: f64,
    angle: f64,
}

impl Rhombus {
    /// Creates a rhombus.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] for a bad side and
    /// [`ShapeError::AngleOutOfRange`] unless `0 < angle < 180`.
    pub fn new(side: f64, angle: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side: positive("side", side)?,
            angle: interior_angle(angle)?,
        })
    }

    /// The side length.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// The interior angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Replaces the side.
    /// ## Errors
    /// Returns [`ShapeError::NonPositive`] and keeps the old side.
    pub fn set_side(&mut self, side: f64) -> Result<(), ShapeError> {
        self.side = positive("side", side)?;
        Ok(())
    }

    /// Replaces the angle.
    /// ## Errors
    /// Returns [`ShapeError::AngleOutOfRange`] and keeps the old angle.
    pub fn set_angle(&mut self, angle: f64) -> Result<(), ShapeError> {
        self.angle = interior_angle(angle)?;
        Ok(())
    }

    // The angle is not a linear dimension.
    pub(crate) fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Self::new(self.side * factor, self.angle)
    }
}

impl Measure for Rhombus {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side * self.angle.to_radians().sin()
    }
}

/// Validates a rhombus angle in degrees.
/// ## Errors
/// Returns [`ShapeError::AngleOutOfRange`] unless `0 < angle < 180`.
pub fn interior_angle(angle: f64) -> Result<f64, ShapeError> {
    if angle > 0.0 && angle < 180.0 {
        Ok(angle)
    } else {
        Err(ShapeError::AngleOutOfRange(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_square_formulas() {
        let square = Square::new(3.0).unwrap();
        assert!((square.perimeter() - 12.0).abs() < EPS);
        assert!((square.area() - 9.0).abs() < EPS);
    }

    #[test]
    fn test_rectangle_formulas() {
        let rect = Rectangle::new(2.0, 5.0).unwrap();
        assert!((rect.perimeter() - 14.0).abs() < EPS);
        assert!((rect.area() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_rectangle_setters_validate() {
        let mut rect = Rectangle::new(2.0, 5.0).unwrap();
        rect.set_width(4.0).unwrap();
        assert!(rect.set_height(0.0).is_err());
        assert!((rect.area() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_right_angle_rhombus_is_a_square() {
        let rhombus = Rhombus::new(5.0, 90.0).unwrap();
        assert_eq!(format!("{:.2}", rhombus.area()), "25.00");
        assert_eq!(format!("{:.2}", rhombus.perimeter()), "20.00");
    }

    #[test]
    fn test_rhombus_angle_bounds() {
        assert_eq!(
            Rhombus::new(1.0, 0.0).unwrap_err(),
            ShapeError::AngleOutOfRange(0.0)
        );
        assert!(Rhombus::new(1.0, 180.0).is_err());
        assert!(Rhombus::new(1.0, f64::NAN).is_err());

        let mut rhombus = Rhombus::new(2.0, 30.0).unwrap();
        assert!(rhombus.set_angle(200.0).is_err());
        assert!((rhombus.angle() - 30.0).abs() < EPS);
        assert!((rhombus.area() - 2.0).abs() < 1e-12);
    }
}
