// src/sink.rs

//! Destinations for relayed tool output.
//!
//! The invoker only knows about the [`LogSink`] trait. Production code uses
//! [`TracingSink`], which turns every line into a `tracing` event; tests can
//! plug in a recording sink instead.

use std::fmt::Debug;

use tracing::{error, info};

use crate::logging::COMPILER_TARGET;

/// Receiver of classified output lines.
///
/// Calls arrive in stream order, one per non-empty line.
pub trait LogSink: Send + Sync + Debug {
    fn log_error(&self, line: &str);
    fn log_info(&self, line: &str);
}

/// Sink that emits each line as a `tracing` event at `ERROR` or `INFO`.
#[derive(Debug, Clone)]
pub struct TracingSink {
    tool: String,
}

impl TracingSink {
    /// `tool` is attached to every event as a field (e.g. `"tsc"`).
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new("tsc")
    }
}

impl LogSink for TracingSink {
    fn log_error(&self, line: &str) {
        error!(target: COMPILER_TARGET, tool = %self.tool, "{}", line);
    }

    fn log_info(&self, line: &str) {
        info!(target: COMPILER_TARGET, tool = %self.tool, "{}", line);
    }
}
