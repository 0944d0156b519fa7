//! Fixed project layout, toolchain names, and compiler flags
//!
//! The driver builds exactly one project with one flag set, so everything
//! lives here as constants rather than in a configuration file.

/// C++ compiler binary name
pub const COMPILER: &str = "clang++";

/// Language standard flag
pub const CXX_STANDARD: &str = "-std=c++17";

/// Warning flags: enable all, enable extra, suppress unused parameters
pub const WARNING_FLAGS: [&str; 3] = ["-Wall", "-Wextra", "-Wno-unused-parameter"];

/// Debug symbols flag
pub const DEBUG_FLAG: &str = "-g";

/// Project header directory
pub const PROJECT_INCLUDE: &str = "include";

/// Application source root, walked recursively
pub const APP_SOURCE_ROOT: &str = "src";

/// Translation unit extension
pub const SOURCE_EXTENSION: &str = "cpp";

/// Vendored Dear ImGui root
pub const IMGUI_ROOT: &str = "thirdparty/imgui";

/// Backends subdirectory inside the ImGui root
pub const IMGUI_BACKENDS_DIR: &str = "backends";

/// Dependency-query tool binary name
pub const PKG_CONFIG: &str = "pkg-config";

/// pkg-config package name for the windowing/graphics dependency
pub const SDL_PKG: &str = "sdl3";

/// Display name used in diagnostics for the dependency
pub const SDL_DISPLAY_NAME: &str = "SDL3";

/// Name of the produced executable
pub const OUTPUT_NAME: &str = "sudoku";
