//! Infrastructure layer
//!
//! Handles all external processes: pkg-config queries and the compiler
//! invocation. This module is the only place where subprocesses spawn.

pub mod pkg_config;
pub mod toolchain;
