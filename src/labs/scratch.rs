//! Drivers for the small integer and table utilities.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::error::Result;
use crate::scratch::{digit_sum, divide, gcd, sine_table};

/// Multiplies and divides two integers.
///
/// ## Errors
/// Returns a parse or overflow error. Division by zero is printed, not returned.
pub fn run_divide<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting divide");
    let a: i32 = console.read("First integer: ")?;
    let b: i32 = console.read("Second integer: ")?;

    let division = divide(a, b)?;
    console.line(format_args!("{a} * {b} = {}", division.product))?;
    match division.quotient {
        Ok(quotient) => console.line(format_args!("{a} / {b} = {quotient}")),
        Err(err) => console.line(format_args!("{a} / {b}: {err}")),
    }
}

/// Prints `x` and `sin(x)` from x1 to x2.
///
/// ## Errors
/// Returns a parse error or [`ArithmeticError::RangeTooLarge`](crate::error::ArithmeticError::RangeTooLarge).
pub fn run_sine_table<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting sine table");
    let from: f64 = console.read("x1 = ")?;
    let to: f64 = console.read("x2 = ")?;

    let rows = sine_table(from, to)?;
    console.line("x\tsin(x)")?;
    for (x, y) in rows {
        console.line(format_args!("{x:.2}\t{y:.6}"))?;
    }
    Ok(())
}

/// Prints the greatest common divisor of two integers.
///
/// ## Errors
/// Returns a parse error.
pub fn run_gcd<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting gcd");
    let a: i64 = console.read("First integer: ")?;
    let b: i64 = console.read("Second integer: ")?;
    console.line(format_args!("gcd({a}, {b}) = {}", gcd(a, b)))
}

/// Prints the digit sum of an integer.
///
/// ## Errors
/// Returns a parse error for anything but an integer.
pub fn run_digit_sum<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("starting digit sum");
    let n: i64 = console.read("Integer: ")?;
    console.line(format_args!("Sum of the digits of {n} = {}", digit_sum(n)))
}
