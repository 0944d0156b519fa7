//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a
//! temporary project tree plus stub `pkg-config`/`clang++` executables on
//! a controlled PATH, so builds run without a real toolchain.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up project layouts and stub tools.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding stub executables; becomes the child's whole PATH
    bin_dir: PathBuf,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let bin_dir = dir.path().join("stub-bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create stub bin directory");
        Self { dir, bin_dir }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Install a stub executable into the PATH seen by the build
    pub fn stub_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        std::fs::write(&path, script).expect("Failed to write stub tool");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stub tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stub tool");
    }

    /// Stub pkg-config answering the SDL3 queries and logging every call
    /// to `pkg-config.log`
    pub fn stub_pkg_config_ok(&self) {
        let log = self.path().join("pkg-config.log");
        self.stub_tool(
            "pkg-config",
            &format!(
                "#!/bin/sh\n\
                 echo \"$@\" >> {log}\n\
                 case \"$2\" in\n\
                   --cflags) echo \"-I/usr/include/SDL3\" ;;\n\
                   --libs) echo \"-lSDL3\" ;;\n\
                 esac\n\
                 exit 0\n",
                log = log.display()
            ),
        );
    }

    /// Stub pkg-config that logs every call and reports the dependency
    /// as unknown
    pub fn stub_pkg_config_unknown(&self) {
        let log = self.path().join("pkg-config.log");
        self.stub_tool(
            "pkg-config",
            &format!(
                "#!/bin/sh\necho \"$@\" >> {log}\nexit 1\n",
                log = log.display()
            ),
        );
    }

    /// Stub clang++ recording its final argument list in `clang.log` and
    /// exiting with the given code
    pub fn stub_compiler(&self, exit_code: i32) {
        let log = self.path().join("clang.log");
        self.stub_tool(
            "clang++",
            &format!(
                "#!/bin/sh\necho \"$@\" > {log}\nexit {exit_code}\n",
                log = log.display()
            ),
        );
    }

    /// Lay out the Sudoku project tree: two application sources, headers,
    /// and a vendored ImGui checkout including files that must never be
    /// compiled
    pub fn layout_sudoku_tree(&self) {
        self.create_file("src/main.cpp", "int main() { return 0; }\n");
        self.create_file("src/board.cpp", "// board\n");
        self.create_file("include/Game.h", "#pragma once\n");
        for unit in [
            "imgui.cpp",
            "imgui_draw.cpp",
            "imgui_tables.cpp",
            "imgui_widgets.cpp",
            "imgui_demo.cpp",
            "example_sdl3_app.cpp",
        ] {
            self.create_file(&format!("thirdparty/imgui/{unit}"), "// imgui\n");
        }
        for unit in ["imgui_impl_sdl3.cpp", "imgui_impl_sdlrenderer3.cpp"] {
            self.create_file(&format!("thirdparty/imgui/backends/{unit}"), "// backend\n");
        }
    }

    /// Run the build driver in the project directory with PATH restricted
    /// to the stub tools
    pub fn run_build(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_sudoku-build"))
            .current_dir(self.path())
            .env("PATH", &self.bin_dir)
            .output()
            .expect("Failed to execute sudoku-build")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
