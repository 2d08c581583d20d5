// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// The external binary could not be started at all. No output has been
    /// relayed when this is returned.
    #[error("failed to spawn {}: {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    #[error("process exited with {}", describe_exit(.code))]
    ProcessExit { code: Option<i32> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RelayError {
    /// Exit code the CLI should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelayError::ProcessExit { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
