//! Compiler invocation assembly
//!
//! Builds the single clang++ command line: all compile flags before the
//! translation units, all link flags after them, `-o` last. Constructed
//! once per build attempt and never mutated afterwards.

use std::path::PathBuf;

use crate::config::defaults;

/// One external compiler process invocation
#[derive(Debug, Clone)]
pub struct CompilerInvocation {
    /// Compiler binary name
    program: String,
    /// Ordered argument list, excluding the program itself
    args: Vec<String>,
}

impl CompilerInvocation {
    /// Assemble the invocation from the collected sources and the resolved
    /// dependency flag sets
    ///
    /// Argument order: language standard, warning flags, debug symbols,
    /// project include, vendored ImGui includes, dependency cflags, all
    /// sources in collection order, dependency libs, output flag and name.
    pub fn assemble(sources: &[PathBuf], cflags: &[String], libs: &[String]) -> Self {
        let mut args: Vec<String> = vec![
            defaults::CXX_STANDARD.to_string(),
        ];
        args.extend(defaults::WARNING_FLAGS.iter().map(|flag| (*flag).to_string()));
        args.push(defaults::DEBUG_FLAG.to_string());
        args.push(format!("-I{}", defaults::PROJECT_INCLUDE));
        args.push(format!("-I{}", defaults::IMGUI_ROOT));
        args.push(format!(
            "-I{}/{}",
            defaults::IMGUI_ROOT,
            defaults::IMGUI_BACKENDS_DIR
        ));
        args.extend(cflags.iter().cloned());
        args.extend(sources.iter().map(|path| path.to_string_lossy().into_owned()));
        args.extend(libs.iter().cloned());
        args.push("-o".to_string());
        args.push(defaults::OUTPUT_NAME.to_string());

        Self {
            program: defaults::COMPILER.to_string(),
            args,
        }
    }

    /// Compiler binary name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Ordered argument list
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Space-joined command line, printed before execution so the user can
    /// audit exactly what runs
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
