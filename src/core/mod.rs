//! Core business logic module
//!
//! This module contains the build pipeline logic. Subprocess spawning
//! belongs in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`sources`] - Translation unit collection
//! - [`command`] - Compiler invocation assembly
//! - [`driver`] - The linear build pipeline

pub mod command;
pub mod driver;
pub mod sources;
