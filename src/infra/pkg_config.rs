//! Dependency flag resolution via pkg-config
//!
//! Invokes `pkg-config <package> --cflags` or `--libs`, captures stdout,
//! and splits it into whitespace-delimited tokens. The outcome is a tagged
//! result so callers can tell "tool absent" apart from "tool ran but the
//! dependency is unknown" without exception machinery.

use std::io;
use std::process::Command;

use crate::config::defaults;

/// Which flag set to request from pkg-config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Compile flags: include paths, preprocessor defines
    Cflags,
    /// Link flags: library search paths, library names
    Libs,
}

impl FlagKind {
    /// The pkg-config command-line flag for this kind
    pub fn flag(self) -> &'static str {
        match self {
            FlagKind::Cflags => "--cflags",
            FlagKind::Libs => "--libs",
        }
    }
}

/// Outcome of one pkg-config invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The pkg-config executable is not on the system
    ToolMissing,
    /// pkg-config ran but exited nonzero (dependency not registered)
    ToolFailed(i32),
    /// Trimmed, whitespace-split stdout tokens
    Success(Vec<String>),
}

/// Query pkg-config for one flag set of `package`
///
/// A spawn failure other than tool-not-found propagates as an IO error.
pub fn query(package: &str, kind: FlagKind) -> io::Result<QueryOutcome> {
    query_with_tool(defaults::PKG_CONFIG, package, kind)
}

fn query_with_tool(tool: &str, package: &str, kind: FlagKind) -> io::Result<QueryOutcome> {
    let output = match Command::new(tool).arg(package).arg(kind.flag()).output() {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(QueryOutcome::ToolMissing),
        Err(e) => return Err(e),
    };

    if !output.status.success() {
        return Ok(QueryOutcome::ToolFailed(output.status.code().unwrap_or(-1)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let tokens = stdout.split_whitespace().map(str::to_string).collect();
    Ok(QueryOutcome::Success(tokens))
}
