//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{AnalyzeArgs, Cli, CliCommand, HistoryArgs};
pub use commands::execute;
