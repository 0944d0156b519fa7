//! sudoku-build - Build driver for the Sudoku ImGui/SDL3 application
//!
//! This library provides the core functionality for compiling the Sudoku
//! game and its vendored Dear ImGui copy into a single executable.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (source collection, command assembly, the
//!   build pipeline)
//! - [`infra`] - Infrastructure layer (pkg-config and compiler subprocesses)
//! - [`config`] - Fixed project names and compiler flags
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
