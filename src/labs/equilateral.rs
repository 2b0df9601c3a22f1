//! Equilateral triangle from its perimeter.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::console::format::{banner, rule};
use crate::error::Result;
use crate::shapes::{Measure, Triangle, positive};

const TABLE_WIDTH: usize = 36;

/// Reads a perimeter and prints the side and area table.
///
/// ## Errors
/// Returns the parse or validation error, for `main` to report.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting equilateral triangle exercise");
    console.line(banner("Equilateral triangle"))?;

    let perimeter = positive("perimeter", console.read("Perimeter: ")?)?;
    let triangle = Triangle::equilateral(perimeter / 3.0)?;

    console.line(rule(TABLE_WIDTH))?;
    console.line(format_args!("{:<12}{:>12}{:>12}", "Perimeter", "Side", "Area"))?;
    console.line(rule(TABLE_WIDTH))?;
    console.line(format_args!(
        "{:<12.3}{:>12.3}{:>12.3}",
        triangle.perimeter(),
        triangle.a(),
        triangle.area()
    ))?;
    console.line(rule(TABLE_WIDTH))
}
