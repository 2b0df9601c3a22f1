//! Arithmetic progression driver.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::console::format::banner;
use crate::error::Result;
use crate::progression::ArithmeticProgression;

/// Runs the progression exercise.
///
/// Numbers are re-prompted until they parse. An index outside `1..=u32::MAX`
/// ends the run before the common difference is asked for.
///
/// ## Errors
/// Returns [`ProgressionError`](crate::error::ProgressionError) for a bad
/// index, or the error that closed the console.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting progression exercise");
    console.line(banner("Arithmetic progression"))?;

    let first: f64 = console.read_until_valid("First element a1: ", Ok)?;
    let index: i64 = console.read_until_valid("Element index n: ", Ok)?;
    let progression = ArithmeticProgression::new(first, index)?;
    let difference: f64 = console.read_until_valid("Common difference d: ", Ok)?;

    console.line(format_args!(
        "a{} = {:.1}",
        progression.index(),
        progression.element(difference)
    ))
}
