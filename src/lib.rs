//! Edu Labs
//!
//! Console exercises from an introductory object-oriented programming
//! course, each a small self-contained program behind one binary.
//!
//! # Overview
//!
//! This library provides:
//! - A shape hierarchy with rotation, scaling and aggregate reports
//! - Feet/inches distances, quadratic equations and arithmetic progressions
//! - An educational center roster with salaries and work experience
//! - Console drivers that run every exercise against any reader and writer
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   lines    ┌──────────────┐   values   ┌──────────────┐
//! │ stdin/stdout │◄──────────►│   Console    │◄──────────►│  labs driver │
//! └──────────────┘            └──────────────┘            └──────┬───────┘
//!                                                                │
//!                                                  ┌─────────────▼─────────────┐
//!                                                  │ shapes, distance, people, │
//!                                                  │ quadratic, progression,   │
//!                                                  │ scratch                   │
//!                                                  └───────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire application
//! - [`console`] - Prompting, parsing and re-prompting
//! - [`labs`] - One driver per exercise
//! - [`shapes`] - Shape kinds, capabilities and reports
//! - [`people`] - Roles, salaries and the center census
//! - [`config`] - Roster loading
//!
//! # Example
//!
//! ```ignore
//! use edu_labs::{console::Console, labs};
//!
//! fn main() -> edu_labs::Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut console = Console::new(stdin.lock(), std::io::stdout());
//!     labs::quadratic::run(&mut console)
//! }
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod console;
pub mod distance;
pub mod error;
pub mod labs;
pub mod people;
pub mod progression;
pub mod quadratic;
pub mod scratch;
pub mod shapes;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
