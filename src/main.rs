//! Edu Labs - Entry Point
//!
//! Parses the subcommand, sets up logging and runs one exercise against
//! stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use edu_labs::config;
use edu_labs::console::Console;
use edu_labs::labs::{self, ReportFormat};

/// Console exercises for introductory object-oriented programming.
#[derive(Parser, Debug)]
#[command(name = "edu-labs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exercise to run.
    #[command(subcommand)]
    command: Command,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build, rotate and scale one shape of every kind.
    Shapes {
        /// Output format of the final report.
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Add, subtract and compare two feet/inches distances.
    Distance,
    /// Solve ax^2 + bx + c = 0.
    Quadratic,
    /// Compute the n-th element of an arithmetic progression.
    Progression,
    /// Report on the people of an educational center.
    People {
        /// JSON roster to load instead of the built-in sample.
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Reference date for ages and experience (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output format of the report.
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Measure a triangle and sort a sample by area.
    Triangles,
    /// Side and area of an equilateral triangle from its perimeter.
    Equilateral,
    /// Multiply and divide two integers.
    Divide,
    /// Print sin(x) from x1 to x2 in 0.01 steps.
    SineTable,
    /// Greatest common divisor of two integers.
    Gcd,
    /// Sum of the decimal digits of an integer.
    DigitSum,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // Create an env filter that respects RUST_LOG but has a default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("edu_labs={level}")));

    // Logs go to stderr so prompts and reports own stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(true)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Runs `command` against `console`.
fn dispatch<R: BufRead, W: Write>(
    command: Command,
    console: &mut Console<R, W>,
) -> Result<edu_labs::Result<()>> {
    let outcome = match command {
        Command::Shapes { format } => labs::shapes::run(console, format),
        Command::Distance => labs::distance::run(console),
        Command::Quadratic => labs::quadratic::run(console),
        Command::Progression => labs::progression::run(console),
        Command::People {
            roster,
            today,
            format,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let people = match roster {
                Some(path) => config::load_roster(&path, today)?,
                None => config::sample_roster(today)?,
            };
            labs::people::run(console, &people, today, format)
        }
        Command::Triangles => labs::triangles::run(console),
        Command::Equilateral => labs::equilateral::run(console),
        Command::Divide => labs::scratch::run_divide(console),
        Command::SineTable => labs::scratch::run_sine_table(console),
        Command::Gcd => labs::scratch::run_gcd(console),
        Command::DigitSum => labs::scratch::run_digit_sum(console),
    };
    Ok(outcome)
}

/// Main entry point.
fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    info!(command = ?args.command, "starting edu-labs");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match dispatch(args.command, &mut console)? {
        Ok(()) => {}
        Err(err) if err.is_user_facing() => {
            debug!(error = %err, "exercise ended early");
            console
                .line(format_args!("Error: {err}"))
                .context("failed to write to stdout")?;
        }
        Err(err) => return Err(err).context("console I/O failed"),
    }

    info!("edu-labs finished");
    Ok(())
}
