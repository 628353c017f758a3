//! Command implementations for the bleuper CLI.

pub mod score;
