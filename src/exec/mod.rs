// src/exec/mod.rs

//! Process execution layer.
//!
//! This module launches the external tool with `tokio::process::Command` and
//! relays its output, line by line, to a [`LogSink`](crate::sink::LogSink).
//!
//! - [`request`] holds the immutable [`InvocationRequest`].
//! - [`lines`] reassembles arbitrary output chunks into trimmed lines.
//! - [`relay`] classifies lines and forwards them to the sink.
//! - [`invoker`] provides the [`ToolInvoker`] trait and the production
//!   [`ProcessInvoker`], which tests can replace with a fake.

pub mod invoker;
pub mod lines;
pub mod relay;
pub mod request;

pub use invoker::{InvocationFuture, ProcessInvoker, ToolInvoker};
pub use lines::{LineSplitter, split_lines};
pub use relay::{InvocationSummary, OutputRelay, relay_reader};
pub use request::InvocationRequest;
