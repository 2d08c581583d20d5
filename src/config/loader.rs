// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to also
/// run the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to defaults.
///
/// Only used for the implicit default path; an explicitly requested config
/// that is missing goes through [`load_and_validate`] and fails.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if path.exists() {
        load_and_validate(path)
    } else {
        debug!(path = %path.display(), "no config file found; using defaults");
        Ok(ConfigFile::default())
    }
}

/// `Tscrelay.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Tscrelay.toml")
}
