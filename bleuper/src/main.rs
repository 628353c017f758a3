// bleuper/src/main.rs
//! bleuper entry point.
//!
//! Parses arguments, sets up logging and dispatches to the selected command.

use anyhow::Result;
use bleuper::cli::{Cli, Commands};
use bleuper::commands::score::run_score;
use bleuper::logger;
use clap::Parser;
use log::{info, LevelFilter};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    info!("bleuper v{} started.", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Score(cmd) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_score(&cmd, cli.quiet, stdin.lock(), &mut stdout.lock())
        }
    }
}
