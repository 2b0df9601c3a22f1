//! Console drivers, one per exercise.
//!
//! Each driver takes a [`Console`](crate::console::Console) and runs a
//! whole exercise against it. Interactive flows re-prompt on bad input;
//! one-shot flows return the first error so `main` can print it and exit.

pub mod distance;
pub mod equilateral;
pub mod people;
pub mod progression;
pub mod quadratic;
pub mod scratch;
pub mod shapes;
pub mod triangles;

use clap::ValueEnum;

/// How a driver prints its final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
