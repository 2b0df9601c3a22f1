//! One-shot quadratic equation driver.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::console::format::banner;
use crate::error::Result;
use crate::quadratic::{Roots, solve};

/// Runs the quadratic solver.
///
/// ## Errors
/// Returns the first parse or equation error, for `main` to report.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting quadratic solver");
    console.line(banner("Quadratic equation ax^2 + bx + c = 0"))?;

    let a: f64 = console.read("a = ")?;
    let b: f64 = console.read("b = ")?;
    let c: f64 = console.read("c = ")?;

    match solve(a, b, c)? {
        Roots::None => console.line("The equation has no real roots.")?,
        Roots::One(x) => console.line(format_args!("One root: x = {x:.6}"))?,
        Roots::Two(x1, x2) => {
            console.line("Two roots:")?;
            console.line(format_args!("x1 = {x1:.6}"))?;
            console.line(format_args!("x2 = {x2:.6}"))?;
        }
    }
    Ok(())
}
