// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `tscrelay`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tscrelay",
    version,
    about = "Run the TypeScript compiler and relay its output as classified log lines.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Tscrelay.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root to run the compiler in. Overrides `[project].root`.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TSCRELAY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the tool and print the command line, but don't run it.
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments for the compiler, appended after `custom_args`.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
