// src/logging.rs

//! Logging setup for `tscrelay` using `tracing` + `tracing-subscriber`.
//!
//! Relayed compiler lines are ordinary `tracing` events under the
//! [`COMPILER_TARGET`] target, so they land on stderr interleaved with the
//! relay's own diagnostics. Filtering that target separately lets a caller
//! keep one and quiet the other, e.g.
//! `TSCRELAY_LOG=warn,tscrelay::compiler=info` shows the compiler output
//! without the spawn/exit bookkeeping.
//!
//! Priority for the filter:
//! 1. `--log-level` CLI flag (a single level for everything)
//! 2. `TSCRELAY_LOG`, either a level name or `target=level` directives
//! 3. `info`

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable read when no `--log-level` is given.
pub const LOG_ENV: &str = "TSCRELAY_LOG";

/// Target of the events that carry relayed compiler output.
pub const COMPILER_TARGET: &str = "tscrelay::compiler";

/// Initialise global logging subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

/// Build the subscriber filter from the CLI flag and the raw value of
/// [`LOG_ENV`].
///
/// An env value that is neither a level name nor a `target=level` directive
/// list falls back to `info` rather than being read as a target name.
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(lvl) = cli_level {
        return level_only(level_from_log_level(lvl));
    }

    let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) else {
        return level_only(tracing::Level::INFO);
    };

    if let Some(level) = parse_level_str(value) {
        return level_only(level);
    }

    if value.contains('=') {
        if let Ok(filter) = EnvFilter::try_new(value) {
            return filter;
        }
    }

    level_only(tracing::Level::INFO)
}

fn level_only(level: tracing::Level) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

/// Parse a plain level name as accepted in [`LOG_ENV`].
pub fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
