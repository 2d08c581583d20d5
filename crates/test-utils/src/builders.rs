#![allow(dead_code)]

use std::path::PathBuf;

use tscrelay::config::{ConfigFile, ProjectSection, RawConfigFile, ToolSection};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                project: ProjectSection::default(),
                tool: ToolSection::default(),
            },
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.project.root = Some(root.into());
        self
    }

    pub fn package(mut self, package_path: &str, bin: &str) -> Self {
        self.config.tool.package_path = package_path.to_string();
        self.config.tool.bin = bin.to_string();
        self
    }

    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.tool.executable = Some(path.into());
        self
    }

    pub fn launcher(mut self, launcher: &str) -> Self {
        self.config.tool.launcher = Some(launcher.to_string());
        self
    }

    pub fn custom_arg(mut self, arg: &str) -> Self {
        self.config.tool.custom_args.push(arg.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
