//! sudoku-build - Build driver for the Sudoku ImGui/SDL3 application
//!
//! Entry point for the sudoku-build command-line application.

use clap::Parser;

use sudoku_build::cli::output::display_error;
use sudoku_build::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Run the build and map every failure to exit status 1
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
