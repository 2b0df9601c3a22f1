//! Interactive shape hierarchy driver.
//!
//! Builds one shape of each kind from console input, rotates the rotatable
//! ones, scales all of them by a common factor and prints the aggregate.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use super::ReportFormat;
use crate::console::Console;
use crate::console::format::banner;
use crate::console::parse_values;
use crate::error::Result;
use crate::shapes::polygon::interior_angle;
use crate::shapes::{
    Circle, Color, Ellipse, Position, Rectangle, Rhombus, Shape, ShapeKind, ShapeMeta,
    ShapeReport, Square, Summary, Triangle, positive, scale_factor,
};

/// Final JSON document.
#[derive(Debug, Serialize)]
struct Output {
    shapes: Vec<ShapeReport>,
    summary: Summary,
}

/// Runs the shapes exercise.
///
/// ## Errors
/// Returns an error only when input ends or the console fails.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, format: ReportFormat) -> Result<()> {
    info!(?format, "starting shapes exercise");
    console.line(banner("Shapes"))?;

    let mut shapes = read_shapes(console)?;

    console.blank()?;
    console.line(banner("Created shapes"))?;
    for shape in &shapes {
        console.line(shape.report())?;
    }

    console.blank()?;
    console.line(banner("Rotation"))?;
    for shape in shapes.iter_mut().filter(|s| s.capabilities().rotatable) {
        rotate(console, shape)?;
    }

    console.blank()?;
    console.line(banner("Scaling"))?;
    let factor = console.read_until_valid("Scale factor for every shape: ", |f: f64| {
        Ok(scale_factor(f)?)
    })?;
    for shape in shapes.iter_mut().filter(|s| s.capabilities().scalable) {
        scale(console, shape, factor)?;
    }

    let summary = Summary::of(&shapes);
    console.blank()?;
    match format {
        ReportFormat::Text => {
            console.line(banner("Final state"))?;
            for shape in &shapes {
                console.line(shape.report())?;
            }
            console.blank()?;
            console.line(banner("Summary"))?;
            console.line(summary)?;
        }
        ReportFormat::Json => {
            let output = Output {
                shapes: shapes.iter().map(Shape::report).collect(),
                summary,
            };
            console.line(serde_json::to_string_pretty(&output)?)?;
        }
    }

    info!(count = summary.count, "shapes exercise finished");
    Ok(())
}

/// Reads one shape of every kind, re-prompting until each is valid.
///
/// ## Errors
/// Returns an error only when input ends or the console fails.
pub fn read_shapes<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Vec<Shape>> {
    let circle = {
        let radius = read_length(console, "Circle radius: ", "radius")?;
        ShapeKind::Circle(Circle::new(radius)?)
    };

    let square = {
        let side = read_length(console, "Square side: ", "side")?;
        ShapeKind::Square(Square::new(side)?)
    };

    let rectangle = {
        let width = read_length(console, "Rectangle width: ", "width")?;
        let height = read_length(console, "Rectangle height: ", "height")?;
        ShapeKind::Rectangle(Rectangle::new(width, height)?)
    };

    let rhombus = {
        let side = read_length(console, "Rhombus side: ", "side")?;
        let angle = console.read_until_valid("Rhombus angle (degrees): ", |a: f64| {
            Ok(interior_angle(a)?)
        })?;
        ShapeKind::Rhombus(Rhombus::new(side, angle)?)
    };

    let triangle = ShapeKind::Triangle(read_triangle(console)?);

    let ellipse = {
        let rx = read_length(console, "Ellipse semi-axis rx: ", "rx")?;
        let ry = read_length(console, "Ellipse semi-axis ry: ", "ry")?;
        ShapeKind::Ellipse(Ellipse::new(rx, ry)?)
    };

    let kinds = [circle, square, rectangle, rhombus, triangle, ellipse];
    Ok(kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            #[allow(clippy::cast_precision_loss)]
            let meta = ShapeMeta::new(kind.name())
                .with_color(Color::cycle(i))
                .at(Position::new(i as f64 * 10.0, 0.0));
            Shape::new(meta, kind)
        })
        .collect())
}

fn read_length<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    field: &'static str,
) -> Result<f64> {
    console.read_until_valid(label, |v: f64| Ok(positive(field, v)?))
}

/// Reads the three sides on one line, re-prompting the whole triple.
fn read_triangle<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Triangle> {
    loop {
        let attempt = console
            .prompt("Triangle sides a b c: ")
            .and_then(|line| {
                let [a, b, c] = parse_values::<f64, 3>(&line)?;
                Ok(Triangle::new(a, b, c)?)
            });
        match attempt {
            Ok(triangle) => return Ok(triangle),
            Err(err) => console.retry_or_fail(err)?,
        }
    }
}

/// Asks for one rotation angle. A bad angle skips the rotation.
fn rotate<R: BufRead, W: Write>(console: &mut Console<R, W>, shape: &mut Shape) -> Result<()> {
    let name = shape.meta().name.clone();
    let label = format!("Rotation angle for {name} (degrees): ");
    let outcome = console
        .read::<f64>(&label)
        .and_then(|angle| Ok(shape.rotate(angle)?));
    match outcome {
        Ok(total) => console.line(format_args!("{name} rotated, total rotation {total:.2}°")),
        Err(err) if err.is_recoverable() => {
            debug!(shape = %name, error = %err, "rotation skipped");
            console.line(format_args!("Error: {err}. Rotation of {name} skipped."))
        }
        Err(err) => Err(err),
    }
}

/// Scales one shape. A factor that pushes a dimension out of range leaves
/// the shape as it was.
fn scale<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    shape: &mut Shape,
    factor: f64,
) -> Result<()> {
    match shape.scale(factor) {
        Ok(()) => Ok(()),
        Err(err) => {
            let name = &shape.meta().name;
            debug!(shape = %name, error = %err, "scaling skipped");
            console.line(format_args!("Error: {err}. Scaling of {name} skipped."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Measure;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_shapes_reprompts_triangle_as_triple() {
        let input = "1\n2\n1\n3\n5\n90\n1 1 5\n3 4\n3 4 5\n5\n3\n";
        let mut console = console(input);
        let shapes = read_shapes(&mut console).unwrap();
        assert_eq!(shapes.len(), 6);
        assert!((shapes[4].area() - 6.0).abs() < 1e-9);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Triangle sides a b c: ").count(), 3);
        assert!(output.contains("violate the triangle inequality"));
        assert!(output.contains("expected 3 values, got 2"));
    }

    #[test]
    fn test_rhombus_angle_reprompted_alone() {
        let input = "1\n2\n1\n3\n5\n180\n90\n3 4 5\n5\n3\n";
        let mut console = console(input);
        let shapes = read_shapes(&mut console).unwrap();
        assert!((shapes[3].area() - 25.0).abs() < 1e-9);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Rhombus side: ").count(), 1);
        assert_eq!(output.matches("Rhombus angle (degrees): ").count(), 2);
    }

    #[test]
    fn test_bad_rotation_is_skipped() {
        let mut shape: Shape = ShapeKind::Square(Square::new(1.0).unwrap()).into();
        let mut console = console("abc\n");
        rotate(&mut console, &mut shape).unwrap();
        assert!(shape.rotation().abs() < f64::EPSILON);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Rotation of square skipped."));
    }

    #[test]
    fn test_out_of_range_scaling_is_skipped() {
        let mut shape: Shape = ShapeKind::Square(Square::new(1e200).unwrap()).into();
        let mut console = console("");
        scale(&mut console, &mut shape, 1e200).unwrap();
        assert_eq!(shape.kind().dimensions(), vec![("side", 1e200)]);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Scaling of square skipped."));
    }
}
