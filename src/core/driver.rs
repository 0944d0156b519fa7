//! The build pipeline
//!
//! A linear run with no branching back: collect sources, resolve SDL3
//! flags, assemble the clang++ command, execute it, report. Every failure
//! is terminal; the caller maps it to exit status 1.

use std::path::Path;

use crate::cli::output;
use crate::config::defaults;
use crate::core::command::CompilerInvocation;
use crate::core::sources;
use crate::error::BuildError;
use crate::infra::pkg_config::{self, FlagKind, QueryOutcome};
use crate::infra::toolchain;

/// Run one build attempt against `project_dir`
///
/// Prints the progress banners and the assembled command to standard
/// output; the compiler's own diagnostics stream through untouched.
pub fn run(project_dir: &Path) -> Result<(), BuildError> {
    output::print_header();

    let sources = sources::collect_sources(project_dir);
    if sources.is_empty() {
        return Err(BuildError::NoSources);
    }
    println!("\nFichiers a compiler: {}", sources.len());

    // Fail-fast: a failed cflags query means the libs query never runs.
    let cflags = resolve_flags(FlagKind::Cflags)?;
    let libs = resolve_flags(FlagKind::Libs)?;

    let compiler_path =
        toolchain::locate(defaults::COMPILER).ok_or_else(|| BuildError::CompilerMissing {
            compiler: defaults::COMPILER.to_string(),
        })?;
    tracing::debug!("compiler resolved to {}", compiler_path.display());
    if let Some(version) = toolchain::version(defaults::COMPILER) {
        tracing::info!("{} version {version}", defaults::COMPILER);
    }

    let invocation = CompilerInvocation::assemble(&sources, &cflags, &libs);
    println!("\nCommande de compilation:");
    println!("{}", invocation.command_line());
    println!();

    let status = toolchain::run_compiler(&invocation, project_dir)?;
    if status.success() {
        output::print_success();
        Ok(())
    } else {
        tracing::debug!("compiler exited with {:?}", status.code());
        Err(BuildError::CompilationFailed)
    }
}

/// Query pkg-config for one flag set of the SDL3 dependency
fn resolve_flags(kind: FlagKind) -> Result<Vec<String>, BuildError> {
    match pkg_config::query(defaults::SDL_PKG, kind)? {
        QueryOutcome::Success(tokens) => Ok(tokens),
        QueryOutcome::ToolMissing => Err(BuildError::PkgConfigMissing),
        QueryOutcome::ToolFailed(code) => {
            tracing::debug!("pkg-config exited with {code}");
            Err(BuildError::DependencyUnresolved {
                name: defaults::SDL_DISPLAY_NAME.to_string(),
            })
        }
    }
}
