// bleuper/src/cli.rs
//! This file defines the command-line interface (CLI) for the bleuper application,
//! including all available commands and their arguments.
//! License: MIT

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "bleuper",
    author = "Shuvam Shah",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sentence-level BLEU scores for translation output",
    long_about = "bleuper scores candidate translations against one or more reference translations using sentence-level BLEU: clipped n-gram precision up to 4-grams, a brevity penalty and optional smoothing for orders without any overlap.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log output, including zero-overlap warnings.", global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.", global = true)]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `bleuper` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scores candidate sentences against a set of references.
    #[command(about = "Scores candidate sentences against a set of references.")]
    Score(ScoreCommand),
}

/// Arguments for the `score` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ScoreCommand {
    /// Reference translation; repeat for several references.
    #[arg(long = "reference", short = 'r', value_name = "TEXT", help = "A reference translation. Can be repeated.")]
    pub references: Vec<String>,

    /// File with one reference per line.
    #[arg(long = "reference-file", value_name = "FILE", help = "Read references from a file, one per line.")]
    pub reference_file: Option<PathBuf>,

    /// A single candidate to score.
    #[arg(long, short = 'c', value_name = "TEXT", help = "The candidate translation to score.")]
    pub candidate: Option<String>,

    /// Path to a file of candidates (reads from stdin if neither this nor --candidate is given).
    #[arg(
        long = "input-file",
        short = 'i',
        value_name = "FILE",
        conflicts_with = "candidate",
        help = "Read candidates from a file, one per line, instead of stdin."
    )]
    pub input_file: Option<PathBuf>,

    /// Per-order weights, starting at unigrams.
    #[arg(
        long,
        short = 'w',
        value_name = "W1,W2,...",
        value_delimiter = ',',
        allow_negative_numbers = true,
        help = "Comma-separated weights for 1-grams, 2-grams, ... (must sum to 1)."
    )]
    pub weights: Vec<f64>,

    /// Smoothing strategy for orders with no overlap.
    #[arg(long, value_enum, value_name = "METHOD", help = "Smoothing applied when some n-gram order has no overlap.")]
    pub smoothing: Option<SmoothingMethod>,

    /// Epsilon for additive-epsilon smoothing.
    #[arg(long, value_name = "F", help = "Epsilon added to each numerator by additive-epsilon smoothing.")]
    pub epsilon: Option<f64>,

    /// Constant k for length-ratio smoothing.
    #[arg(long, value_name = "F", help = "Divisor constant used by length-ratio smoothing.")]
    pub k: Option<f64>,

    /// Fewest references the scorer accepts.
    #[arg(long = "min-references", value_name = "N", help = "Minimum number of references required.")]
    pub min_references: Option<usize>,

    /// Path to a YAML scorer configuration.
    #[arg(long = "config", value_name = "FILE", help = "Load scorer settings from a YAML file.")]
    pub config: Option<PathBuf>,

    /// Emit one JSON report per candidate instead of a plain score line.
    #[arg(long, help = "Print a JSON score report per candidate.")]
    pub json: bool,
}

/// Smoothing strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SmoothingMethod {
    /// Disable smoothing, even if the config file selects one.
    None,
    /// Add epsilon to every numerator.
    AdditiveEpsilon,
    /// Add one to numerator and denominator of every order above 1.
    AddOne,
    /// Halve the replacement value for each successive zero order.
    Exponential,
    /// Scale zero orders by the candidate length.
    LengthRatio,
}
