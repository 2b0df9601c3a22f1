//! Line-based console input and output.
//!
//! Every exercise talks to the user through a [`Console`]. It is generic over
//! the reader and the writer so the drivers can run against in-memory buffers
//! in tests and against locked stdin/stdout in the binary.
//!
//! # Usage
//!
//! ```ignore
//! use edu_labs::console::Console;
//!
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! let radius: f64 = console.read_until_valid("Radius: ", |r: f64| Ok(r))?;
//! ```

pub mod format;

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, InputError, Result};

/// Interactive console bound to a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    /// ## Errors
    /// Returns [`Error::Io`] if the writer fails.
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes an empty line.
    /// ## Errors
    /// Returns [`Error::Io`] if the writer fails.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `label` without a newline and reads one line of input.
    ///
    /// The returned line has its trailing line break removed.
    ///
    /// ## Errors
    /// Returns [`InputError::Eof`] if the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(InputError::Eof.into());
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts once and parses the answer as `T`.
    ///
    /// Used by one-shot flows, where a bad value ends the program.
    ///
    /// ## Errors
    /// Returns [`InputError::Parse`] if the line is not a valid `T`.
    pub fn read<T: FromStr>(&mut self, label: &str) -> Result<T> {
        let line = self.prompt(label)?;
        Ok(parse_value(&line)?)
    }

    /// Prompts until the answer parses as `T` and passes `validate`.
    ///
    /// Parse failures and recoverable validation errors print the error and
    /// ask again. A closed input or an IO failure is returned to the caller.
    ///
    /// ## Errors
    /// Returns the first unrecoverable error.
    pub fn read_until_valid<T, U, F>(&mut self, label: &str, mut validate: F) -> Result<U>
    where
        T: FromStr,
        F: FnMut(T) -> Result<U>,
    {
        loop {
            let attempt = self.read::<T>(label).and_then(&mut validate);
            match attempt {
                Ok(value) => return Ok(value),
                Err(err) => self.retry_or_fail(err)?,
            }
        }
    }

    /// Reports a recoverable error and returns, or propagates the rest.
    ///
    /// ## Errors
    /// Returns `err` unchanged when it is not recoverable.
    pub fn retry_or_fail(&mut self, err: Error) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        debug!(error = %err, "rejected input");
        self.line(format_args!("Error: {err}. Please try again."))
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a trimmed console value, accepting `,` as a decimal separator.
///
/// ## Errors
/// Returns [`InputError::Parse`] naming the target type.
pub fn parse_value<T: FromStr>(text: &str) -> std::result::Result<T, InputError> {
    let trimmed = text.trim();
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    normalized.parse().map_err(|_| InputError::Parse {
        input: trimmed.to_string(),
        expected: type_label::<T>(),
    })
}

/// Splits a line on whitespace and parses exactly `N` values.
///
/// ## Errors
/// Returns [`InputError::WrongArity`] or [`InputError::Parse`].
pub fn parse_values<T: FromStr, const N: usize>(
    text: &str,
) -> std::result::Result<[T; N], InputError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != N {
        return Err(InputError::WrongArity {
            expected: N,
            actual: parts.len(),
        });
    }
    let values = parts
        .into_iter()
        .map(parse_value)
        .collect::<std::result::Result<Vec<T>, _>>()?;
    values.try_into().map_err(|_| InputError::WrongArity {
        expected: N,
        actual: 0,
    })
}

fn type_label<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    match name {
        "f32" | "f64" => "number",
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
            "integer"
        }
        _ => "value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_value_accepts_comma_separator() {
        let value: f64 = parse_value(" 2,5 ").unwrap();
        assert!((value - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_value_reports_expected_type() {
        let err = parse_value::<i32>("abc").unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a valid integer");
    }

    #[test]
    fn test_parse_values_checks_arity() {
        let err = parse_values::<f64, 3>("1 2").unwrap_err();
        assert!(matches!(
            err,
            InputError::WrongArity {
                expected: 3,
                actual: 2
            }
        ));

        let [a, b, c] = parse_values::<f64, 3>("3 4 5").unwrap();
        assert_eq!((a, b, c), (3.0, 4.0, 5.0));
    }

    #[test]
    fn test_read_until_valid_reprompts() {
        let mut console = console("abc\n-1\n2.5\n");
        let value = console
            .read_until_valid("x = ", |v: f64| {
                if v > 0.0 {
                    Ok(v)
                } else {
                    Err(crate::error::ShapeError::NonPositive {
                        field: "x",
                        value: v,
                    }
                    .into())
                }
            })
            .unwrap();
        assert!((value - 2.5).abs() < f64::EPSILON);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("x = ").count(), 3);
        assert!(output.contains("'abc' is not a valid number"));
        assert!(output.contains("x must be a positive number, got -1"));
    }

    #[test]
    fn test_read_until_valid_stops_at_eof() {
        let mut console = console("abc\n");
        let err = console
            .read_until_valid("x = ", |v: f64| Ok(v))
            .unwrap_err();
        assert!(matches!(err, Error::Input(InputError::Eof)));
    }

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut console = console("hello\r\n");
        assert_eq!(console.prompt("> ").unwrap(), "hello");
    }
}
