//! Error types for sudoku-build
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Build pipeline errors
///
/// Every variant is fatal: the pipeline never retries, and each one maps to
/// process exit status 1. The user-facing variants carry the French
/// diagnostic text of the Sudoku project.
#[derive(Error, Debug)]
pub enum BuildError {
    /// No translation units discovered (misconfigured project layout)
    #[error("Aucun fichier source trouve")]
    NoSources,

    /// The pkg-config executable is not present on the system
    #[error("pkg-config non trouve")]
    PkgConfigMissing,

    /// pkg-config ran but does not know the requested dependency
    #[error("{name} non trouve via pkg-config")]
    DependencyUnresolved { name: String },

    /// The compiler executable is not present on the system
    #[error("{compiler} non trouve")]
    CompilerMissing { compiler: String },

    /// The compiler ran and exited nonzero; its own diagnostics were
    /// already streamed to the user
    #[error("la compilation a echoue")]
    CompilationFailed,

    /// IO error while spawning or waiting on a subprocess
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
