//! Shape hierarchy exercise.
//!
//! Every shape kind measures its perimeter and area through [`Measure`].
//! A [`Shape`] pairs one [`ShapeKind`] with descriptive metadata plus the
//! running rotation and scale factor. Which operations a kind supports is
//! described by [`Capabilities`] and checked when the operation is applied.
//!
//! # Architecture
//!
//! The shapes module is organized into:
//! - `meta`: color, position and other descriptive fields
//! - `round`: circles and ellipses
//! - `polygon`: squares, rectangles and rhombi
//! - `triangle`: triangles and area ordering
//! - `report`: printable and serializable reports, plus aggregation

pub mod meta;
pub mod polygon;
pub mod report;
pub mod round;
pub mod triangle;

use serde::Serialize;

use crate::error::ShapeError;

pub use meta::{Color, Position, ShapeMeta};
pub use polygon::{Rectangle, Rhombus, Square};
pub use report::{ShapeReport, Summary};
pub use round::{Circle, Ellipse};
pub use triangle::Triangle;

/// The capability contract shared by every shape.
pub trait Measure {
    /// Length of the boundary.
    fn perimeter(&self) -> f64;

    /// Enclosed area.
    fn area(&self) -> f64;
}

/// Operations and classifications a shape kind supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Bounded by straight sides.
    pub polygon: bool,
    /// Bounded by a curve.
    pub round: bool,
    /// Tracks a rotation angle.
    pub rotatable: bool,
    /// Can be resized by a factor.
    pub scalable: bool,
}

/// The concrete geometry of a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// A circle.
    Circle(Circle),
    /// A square.
    Square(Square),
    /// A rectangle.
    Rectangle(Rectangle),
    /// A rhombus.
    Rhombus(Rhombus),
    /// A triangle.
    Triangle(Triangle),
    /// An ellipse.
    Ellipse(Ellipse),
}

impl ShapeKind {
    /// Lowercase kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Square(_) => "square",
            Self::Rectangle(_) => "rectangle",
            Self::Rhombus(_) => "rhombus",
            Self::Triangle(_) => "triangle",
            Self::Ellipse(_) => "ellipse",
        }
    }

    /// What this kind supports. Rotating a circle is meaningless, so it is
    /// the only kind without rotation.
    pub fn capabilities(&self) -> Capabilities {
        let round = matches!(self, Self::Circle(_) | Self::Ellipse(_));
        Capabilities {
            polygon: !round,
            round,
            rotatable: !matches!(self, Self::Circle(_)),
            scalable: true,
        }
    }

    /// Named dimension values, in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Circle(s) => vec![("radius", s.radius())],
            Self::Square(s) => vec![("side", s.side())],
            Self::Rectangle(s) => vec![("width", s.width()), ("height", s.height())],
            Self::Rhombus(s) => vec![("side", s.side()), ("angle", s.angle())],
            Self::Triangle(s) => vec![("a", s.a()), ("b", s.b()), ("c", s.c())],
            Self::Ellipse(s) => vec![("rx", s.rx()), ("ry", s.ry())],
        }
    }

    /// A copy with every linear dimension multiplied by `factor`, validated
    /// like a freshly constructed shape.
    fn scaled(&self, factor: f64) -> Result<Self, ShapeError> {
        Ok(match self {
            Self::Circle(s) => Self::Circle(s.scaled(factor)?),
            Self::Square(s) => Self::Square(s.scaled(factor)?),
            Self::Rectangle(s) => Self::Rectangle(s.scaled(factor)?),
            Self::Rhombus(s) => Self::Rhombus(s.scaled(factor)?),
            Self::Triangle(s) => Self::Triangle(s.scaled(factor)?),
            Self::Ellipse(s) => Self::Ellipse(s.scaled(factor)?),
        })
    }
}

impl Measure for ShapeKind {
    fn perimeter(&self) -> f64 {
        match self {
            Self::Circle(s) => s.perimeter(),
            Self::Square(s) => s.perimeter(),
            Self::Rectangle(s) => s.perimeter(),
            Self::Rhombus(s) => s.perimeter(),
            Self::Triangle(s) => s.perimeter(),
            Self::Ellipse(s) => s.perimeter(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Self::Circle(s) => s.area(),
            Self::Square(s) => s.area(),
            Self::Rectangle(s) => s.area(),
            Self::Rhombus(s) => s.area(),
            Self::Triangle(s) => s.area(),
            Self::Ellipse(s) => s.area(),
        }
    }
}

/// A shape instance: geometry, metadata and transform state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    meta: ShapeMeta,
    #[serde(flatten)]
    kind: ShapeKind,
    rotation: f64,
    scale: f64,
}

impl Shape {
    /// Wraps `kind` with `meta`, unrotated and at scale 1.
    pub fn new(meta: ShapeMeta, kind: ShapeKind) -> Self {
        Self {
            meta,
            kind,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Wraps `kind` with default metadata named after the kind.
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self::new(ShapeMeta::new(kind.name()), kind)
    }

    /// Descriptive metadata.
    pub fn meta(&self) -> &ShapeMeta {
        &self.meta
    }

    /// Mutable metadata.
    pub fn meta_mut(&mut self) -> &mut ShapeMeta {
        &mut self.meta
    }

    /// The geometry.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Mutable geometry. The kind-specific setters keep invariants intact.
    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    /// Cumulative rotation in degrees, within `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Product of every scale factor applied so far.
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Shorthand for `self.kind().capabilities()`.
    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    /// Adds `angle` degrees to the rotation, modulo 360.
    ///
    /// Returns the new cumulative rotation.
    ///
    /// ## Errors
    /// Returns [`ShapeError::Unsupported`] for circles and
    /// [`ShapeError::NonFiniteAngle`] for NaN or infinite angles.
    pub fn rotate(&mut self, angle: f64) -> Result<f64, ShapeError> {
        if !self.capabilities().rotatable {
            return Err(ShapeError::Unsupported {
                kind: self.kind.name(),
                capability: "rotation",
            });
        }
        if !angle.is_finite() {
            return Err(ShapeError::NonFiniteAngle(angle));
        }
        let total = (self.rotation + angle).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative totals.
        self.rotation = if total < 360.0 { total } else { 0.0 };
        Ok(self.rotation)
    }

    /// Multiplies every linear dimension by `factor`.
    ///
    /// Nothing changes on error.
    ///
    /// ## Errors
    /// Returns [`ShapeError::InvalidScaleFactor`] unless `factor > 0`, and
    /// [`ShapeError::NonPositive`] or [`ShapeError::TriangleInequality`] when
    /// a scaled dimension overflows or underflows.
    pub fn scale(&mut self, factor: f64) -> Result<(), ShapeError> {
        if !self.capabilities().scalable {
            return Err(ShapeError::Unsupported {
                kind: self.kind.name(),
                capability: "scaling",
            });
        }
        let factor = scale_factor(factor)?;
        let kind = self.kind.scaled(factor)?;
        let scale = positive("cumulative scale", self.scale * factor)?;
        self.kind = kind;
        self.scale = scale;
        Ok(())
    }

    /// Builds the printable report for this shape.
    pub fn report(&self) -> ShapeReport {
        ShapeReport::of(self)
    }
}

impl Measure for Shape {
    fn perimeter(&self) -> f64 {
        self.kind.perimeter()
    }

    fn area(&self) -> f64 {
        self.kind.area()
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Self::from_kind(kind)
    }
}

/// Validates a scale factor.
/// ## Errors
/// Returns [`ShapeError::InvalidScaleFactor`] unless `factor` is finite and positive.
pub fn scale_factor(factor: f64) -> Result<f64, ShapeError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ShapeError::InvalidScaleFactor(factor))
    }
}

/// Validates a linear dimension.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { field, value })
    }
}
