//! Printable shape reports and collection summaries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Color, Measure, Position, Shape};
use crate::console::format::fixed2;

/// One named dimension of a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    /// Dimension name, e.g. `radius`.
    pub name: &'static str,
    /// Current value.
    pub value: f64,
}

/// A snapshot of everything a shape reports about itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    /// Display name.
    pub name: String,
    /// Kind name.
    pub kind: &'static str,
    /// Fill color.
    pub color: Color,
    /// Anchor position.
    pub position: Position,
    /// Visibility flag.
    pub visible: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Kind-specific dimensions.
    pub dimensions: Vec<Dimension>,
    /// Perimeter.
    pub perimeter: f64,
    /// Area.
    pub area: f64,
    /// Cumulative rotation in degrees, for rotatable kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Cumulative scale factor.
    pub scale: f64,
}

impl ShapeReport {
    /// Captures the current state of `shape`.
    pub fn of(shape: &Shape) -> Self {
        let meta = shape.meta();
        Self {
            name: meta.name.clone(),
            kind: shape.kind().name(),
            color: meta.color,
            position: meta.position,
            visible: meta.visible,
            created_at: meta.created_at,
            dimensions: shape
                .kind()
                .dimensions()
                .into_iter()
                .map(|(name, value)| Dimension { name, value })
                .collect(),
            perimeter: shape.perimeter(),
            area: shape.area(),
            rotation: shape.capabilities().rotatable.then(|| shape.rotation()),
            scale: shape.scale_factor(),
        }
    }
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self
            .dimensions
            .iter()
            .map(|d| format!("{} = {}", d.name, fixed2(d.value)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "{} ({}): {}", self.name, self.kind, dims)?;
        writeln!(
            f,
            "  color {}, position {}, {}",
            self.color,
            self.position,
            if self.visible { "visible" } else { "hidden" }
        )?;
        writeln!(f, "  Perimeter = {}", fixed2(self.perimeter))?;
        write!(f, "  Area = {}", fixed2(self.area))?;
        if let Some(rotation) = self.rotation {
            write!(f, "\n  Rotation = {}°", fixed2(rotation))?;
        }
        if (self.scale - 1.0).abs() > f64::EPSILON {
            write!(f, "\n  Scale = {}", fixed2(self.scale))?;
        }
        Ok(())
    }
}

/// Totals and capability counts over a collection of shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Number of shapes.
    pub count: usize,
    /// Sum of areas.
    pub total_area: f64,
    /// Sum of perimeters.
    pub total_perimeter: f64,
    /// Shapes bounded by straight sides.
    pub polygons: usize,
    /// Shapes bounded by a curve.
    pub round: usize,
    /// Shapes that can rotate.
    pub rotatable: usize,
    /// Shapes that can scale.
    pub scalable: usize,
}

impl Summary {
    /// Aggregates `shapes`.
    pub fn of<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        shapes.into_iter().fold(Self::default(), |mut acc, shape| {
            let caps = shape.capabilities();
            acc.count += 1;
            acc.total_area += shape.area();
            acc.total_perimeter += shape.perimeter();
            acc.polygons += usize::from(caps.polygon);
            acc.round += usize::from(caps.round);
            acc.rotatable += usize::from(caps.rotatable);
            acc.scalable += usize::from(caps.scalable);
            acc
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shapes: {}", self.count)?;
        writeln!(f, "Total area = {}", fixed2(self.total_area))?;
        writeln!(f, "Total perimeter = {}", fixed2(self.total_perimeter))?;
        writeln!(f, "Polygons: {}", self.polygons)?;
        writeln!(f, "Round shapes: {}", self.round)?;
        writeln!(f, "Rotatable: {}", self.rotatable)?;
        write!(f, "Scalable: {}", self.scalable)
    }
}
