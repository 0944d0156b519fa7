//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::path::Path;

use clap::Parser;

use crate::core::driver;
use crate::error::BuildError;

/// sudoku-build - Build driver for the Sudoku ImGui/SDL3 application
///
/// Collects the project sources, resolves SDL3 flags via pkg-config, and
/// runs a single clang++ invocation. Takes no operational arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the build against the current working directory
    pub fn run(self) -> Result<(), BuildError> {
        driver::run(Path::new("."))
    }

    /// Map the verbosity count to a tracing level
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
