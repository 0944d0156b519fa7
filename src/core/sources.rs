//! Translation unit collection
//!
//! Walks the application source root recursively and appends a fixed
//! allowlist of vendored Dear ImGui units. The allowlists are deliberate:
//! a real ImGui checkout ships example programs next to the library, and
//! scanning the vendored tree by extension would pull those in.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults;

/// ImGui core translation units, compiled from the vendored root
pub const IMGUI_CORE_UNITS: [&str; 5] = [
    "imgui.cpp",
    "imgui_draw.cpp",
    "imgui_tables.cpp",
    "imgui_widgets.cpp",
    "imgui_demo.cpp",
];

/// ImGui platform backend units (SDL3 windowing/input + SDL3 renderer),
/// compiled from the backends subdirectory
pub const IMGUI_BACKEND_UNITS: [&str; 2] =
    ["imgui_impl_sdl3.cpp", "imgui_impl_sdlrenderer3.cpp"];

/// Collect every translation unit to compile, as paths relative to
/// `project_dir`
///
/// Application sources come first, in sorted walk order, then the ImGui
/// core units, then the backend units. A missing root contributes zero
/// files; it is not an error. An empty result signals a misconfigured
/// project layout and the caller must not build from it.
///
/// The two roots are assumed disjoint; nothing de-duplicates overlapping
/// paths.
pub fn collect_sources(project_dir: &Path) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    let app_root = project_dir.join(defaults::APP_SOURCE_ROOT);
    if app_root.exists() {
        for entry in WalkDir::new(&app_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let has_source_ext = entry
                .path()
                .extension()
                .is_some_and(|ext| ext == defaults::SOURCE_EXTENSION);
            if !has_source_ext {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(project_dir) {
                sources.push(relative.to_path_buf());
            }
        }
    }

    if project_dir.join(defaults::IMGUI_ROOT).exists() {
        let imgui_root = Path::new(defaults::IMGUI_ROOT);
        for unit in IMGUI_CORE_UNITS {
            sources.push(imgui_root.join(unit));
        }
        let backends = imgui_root.join(defaults::IMGUI_BACKENDS_DIR);
        for unit in IMGUI_BACKEND_UNITS {
            sources.push(backends.join(unit));
        }
    }

    sources
}
