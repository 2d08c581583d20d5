// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::tool_paths::{DEFAULT_PACKAGE_BIN, DEFAULT_PACKAGE_PATH, ToolLocation};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [project]
/// root = "."
///
/// [tool]
/// package_path = "node_modules/typescript"
/// bin = "bin/tsc"
/// launcher = "node"
/// custom_args = ["--noEmit", "-p", "."]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub tool: ToolSection,
}

/// Validated configuration, obtained through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub project: ProjectSection,
    pub tool: ToolSection,
}

/// `[project]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    /// Project root the tool runs in. Relative paths are taken relative to
    /// the config file's directory; `None` means that directory itself.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// `[tool]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSection {
    /// Package directory holding the tool, relative to the project root.
    #[serde(default = "default_package_path")]
    pub package_path: String,

    /// Binary path inside `package_path`.
    #[serde(default = "default_bin")]
    pub bin: String,

    /// Explicit binary; takes precedence over `package_path` + `bin`.
    #[serde(default)]
    pub executable: Option<PathBuf>,

    /// Program to run the binary with (e.g. `"node"`).
    #[serde(default)]
    pub launcher: Option<String>,

    /// Extra arguments appended verbatim to every invocation.
    #[serde(default)]
    pub custom_args: Vec<String>,
}

fn default_package_path() -> String {
    DEFAULT_PACKAGE_PATH.to_string()
}

fn default_bin() -> String {
    DEFAULT_PACKAGE_BIN.to_string()
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            package_path: default_package_path(),
            bin: default_bin(),
            executable: None,
            launcher: None,
            custom_args: Vec::new(),
        }
    }
}

impl ToolSection {
    pub fn location(&self) -> ToolLocation {
        match &self.executable {
            Some(path) => ToolLocation::Executable(path.clone()),
            None => ToolLocation::Package {
                package_path: PathBuf::from(&self.package_path),
                bin: PathBuf::from(&self.bin),
            },
        }
    }
}
