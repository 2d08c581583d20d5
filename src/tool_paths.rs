// src/tool_paths.rs

//! Locating the tool binary inside a project.
//!
//! By default the compiler is the `tsc` script shipped in the project's
//! `node_modules/typescript` package. A config can instead point at an
//! explicit executable, and can ask for the binary to be run through a
//! launcher such as `node`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Package directory used when nothing else is configured.
pub const DEFAULT_PACKAGE_PATH: &str = "node_modules/typescript";

/// Binary path inside the package.
pub const DEFAULT_PACKAGE_BIN: &str = "bin/tsc";

/// Where the tool lives, before it is anchored to a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolLocation {
    /// `<root>/<package_path>/<bin>`.
    Package { package_path: PathBuf, bin: PathBuf },
    /// An explicit binary. Relative paths are taken relative to the root.
    Executable(PathBuf),
}

impl Default for ToolLocation {
    fn default() -> Self {
        ToolLocation::Package {
            package_path: PathBuf::from(DEFAULT_PACKAGE_PATH),
            bin: PathBuf::from(DEFAULT_PACKAGE_BIN),
        }
    }
}

impl ToolLocation {
    /// Absolute (or root-relative) path of the binary.
    pub fn binary_path(&self, root: &Path) -> PathBuf {
        match self {
            ToolLocation::Package { package_path, bin } => root.join(package_path).join(bin),
            ToolLocation::Executable(path) => root.join(path),
        }
    }
}

/// What actually gets spawned: the executable plus arguments that must come
/// before any user-supplied ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub executable: PathBuf,
    pub leading_args: Vec<String>,
}

/// Anchor `location` at `root`, optionally behind a `launcher`.
///
/// A binary that doesn't exist is only warned about here; spawning it is what
/// turns that into an error.
pub fn resolve_tool(root: &Path, location: &ToolLocation, launcher: Option<&str>) -> ResolvedTool {
    let binary = location.binary_path(root);

    if !binary.exists() {
        warn!(path = %binary.display(), "tool binary not found");
    }

    let resolved = match launcher {
        Some(launcher) => ResolvedTool {
            executable: PathBuf::from(launcher),
            leading_args: vec![binary.to_string_lossy().into_owned()],
        },
        None => ResolvedTool {
            executable: binary,
            leading_args: Vec::new(),
        },
    };

    debug!(
        executable = %resolved.executable.display(),
        leading_args = ?resolved.leading_args,
        "resolved tool"
    );

    resolved
}
