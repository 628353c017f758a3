// bleuper/src/lib.rs
//! # bleuper CLI Application
//!
//! This crate provides the command-line front end for `bleuper-core`: it reads
//! references and candidates, tokenizes them on whitespace and prints one
//! sentence-level BLEU score (or JSON report) per candidate.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::score::run_score;
