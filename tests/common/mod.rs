//! Common test helpers and utilities.

#![allow(dead_code)]

use std::io::Cursor;

use chrono::NaiveDate;
use edu_labs::console::Console;

/// Console reading from a fixed string and writing into memory.
pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Creates a console fed with `input`.
pub fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Runs `driver` against `input` and returns everything it printed.
///
/// Panics if the driver fails.
pub fn run_driver<F>(input: &str, driver: F) -> String
where
    F: FnOnce(&mut TestConsole) -> edu_labs::Result<()>,
{
    let mut console = console(input);
    if let Err(err) = driver(&mut console) {
        panic!("driver failed: {err}");
    }
    String::from_utf8(console.into_output()).expect("driver output is UTF-8")
}

/// Runs `driver` against `input` and returns its error.
///
/// Panics if the driver succeeds.
pub fn driver_error<F>(input: &str, driver: F) -> edu_labs::Error
where
    F: FnOnce(&mut TestConsole) -> edu_labs::Result<()>,
{
    let mut console = console(input);
    match driver(&mut console) {
        Ok(()) => panic!("driver succeeded unexpectedly"),
        Err(err) => err,
    }
}

/// The fixed reference date used by roster tests.
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
}

/// Joins answers into console input, one per line.
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
