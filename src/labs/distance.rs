//! Feet/inches arithmetic driver.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::console::format::banner;
use crate::distance::Distance;
use crate::error::Result;

/// Runs the distance exercise.
///
/// ## Errors
/// Returns an error only when input ends or the console fails.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting distance exercise");
    console.line(banner("Distances"))?;

    let first = read_distance(console, "first")?;
    let second = read_distance(console, "second")?;

    console.blank()?;
    console.line(format_args!("First distance: {first}"))?;
    console.line(format_args!("Second distance: {second}"))?;
    match first + second {
        Ok(sum) => console.line(format_args!("Sum: {sum}"))?,
        Err(err) => console.line(format_args!("Sum: Error: {err}"))?,
    }
    console.line(format_args!("Difference: {}", first - second))?;

    console.blank()?;
    console.line(banner("Comparison"))?;
    let comparisons = [
        ("==", first == second),
        ("!=", first != second),
        ("<", first < second),
        ("<=", first <= second),
        (">", first > second),
        (">=", first >= second),
    ];
    for (op, holds) in comparisons {
        console.line(format_args!("{first} {op} {second}: {holds}"))?;
    }
    Ok(())
}

/// Reads feet, then inches, re-prompting each until valid.
fn read_distance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    which: &str,
) -> Result<Distance> {
    let feet = console.read_until_valid(&format!("Feet of the {which} distance: "), |f: i32| {
        Distance::new(f, 0.0)?;
        Ok(f)
    })?;
    console.read_until_valid(
        &format!("Inches of the {which} distance: "),
        |i: f64| Ok(Distance::new(feet, i)?),
    )
}
