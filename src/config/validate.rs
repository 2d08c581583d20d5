// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{RelayError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RelayError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile {
            project: raw.project,
            tool: raw.tool,
        })
    }
}

/// Semantic checks that serde can't express.
///
/// `custom_args` is not checked; its tokens go to the tool verbatim.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tool_location(cfg)?;
    validate_launcher(cfg)?;
    Ok(())
}

fn validate_tool_location(cfg: &RawConfigFile) -> Result<()> {
    if let Some(exe) = &cfg.tool.executable {
        if exe.as_os_str().is_empty() {
            return Err(RelayError::ConfigError(
                "[tool].executable must not be empty".to_string(),
            ));
        }
        return Ok(());
    }

    if cfg.tool.package_path.trim().is_empty() {
        return Err(RelayError::ConfigError(
            "[tool].package_path must not be empty".to_string(),
        ));
    }

    if cfg.tool.bin.trim().is_empty() {
        return Err(RelayError::ConfigError(
            "[tool].bin must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_launcher(cfg: &RawConfigFile) -> Result<()> {
    match &cfg.tool.launcher {
        Some(launcher) if launcher.trim().is_empty() => Err(RelayError::ConfigError(
            "[tool].launcher must not be empty when set".to_string(),
        )),
        _ => Ok(()),
    }
}
