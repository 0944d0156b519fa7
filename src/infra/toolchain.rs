//! Compiler lookup and invocation
//!
//! Resolves the compiler on PATH, probes its version for verbose logging,
//! and spawns the assembled invocation with inherited stdio so its
//! diagnostics stream straight to the user.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::core::command::CompilerInvocation;

/// Locate a compiler binary on PATH
pub fn locate(compiler: &str) -> Option<PathBuf> {
    which::which(compiler).ok()
}

/// Probe `<compiler> --version` and extract a version string
pub fn version(compiler: &str) -> Option<String> {
    let output = Command::new(compiler).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    extract_version(&format!("{stdout}{stderr}"))
}

/// Extract version string from command output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Spawn the compiler and block until it exits
///
/// Stdout/stderr are inherited; the exit status is the sole success
/// signal consulted by the caller.
pub fn run_compiler(invocation: &CompilerInvocation, cwd: &Path) -> io::Result<ExitStatus> {
    Command::new(invocation.program())
        .args(invocation.args())
        .current_dir(cwd)
        .status()
}
