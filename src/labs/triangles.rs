//! Triangle measurement and area sorting driver.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::format::banner;
use crate::console::{Console, parse_values};
use crate::error::Result;
use crate::shapes::triangle::sort_by_area;
use crate::shapes::{Measure, Triangle};

/// Side triples sorted in the second half of the exercise.
pub const SAMPLE: [(f64, f64, f64); 6] = [
    (3.0, 4.0, 5.0),
    (5.0, 5.0, 5.0),
    (2.0, 3.0, 4.0),
    (6.0, 8.0, 10.0),
    (7.0, 7.0, 7.0),
    (1.0, 1.0, 1.0),
];

/// Measures one triangle from input, then sorts [`SAMPLE`] by area.
///
/// ## Errors
/// Returns the first parse or triangle error, for `main` to report.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting triangles exercise");
    console.line(banner("Triangle"))?;

    let line = console.prompt("Enter three sides separated by spaces: ")?;
    let [a, b, c] = parse_values::<f64, 3>(&line)?;
    let triangle = Triangle::new(a, b, c)?;

    console.line(format_args!("Sides: {triangle:.3}"))?;
    console.line(format_args!("Perimeter: {:.3}", triangle.perimeter()))?;
    console.line(format_args!("Area: {:.3}", triangle.area()))?;

    let mut sample = SAMPLE
        .iter()
        .map(|&(a, b, c)| Triangle::new(a, b, c))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    sort_by_area(&mut sample);
    debug!(count = sample.len(), "sorted sample triangles");

    console.blank()?;
    console.line(banner("Sample sorted by area"))?;
    for triangle in &sample {
        console.line(format_args!(
            "{triangle:.2}: area {:.2}",
            triangle.area()
        ))?;
    }
    Ok(())
}
