// src/exec/invoker.rs

//! External tool invocation.
//!
//! The compiler task talks to a [`ToolInvoker`] instead of spawning processes
//! itself, so tests can swap in a fake that records requests. The production
//! implementation is [`ProcessInvoker`].

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::errors::{RelayError, Result};
use crate::exec::lines::LineSplitter;
use crate::exec::relay::{InvocationSummary, OutputRelay, READ_CHUNK};
use crate::exec::request::InvocationRequest;
use crate::sink::LogSink;

/// How long buffered output is still read after the child has exited.
pub const DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Future returned by [`ToolInvoker`] methods.
pub type InvocationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<InvocationSummary>> + Send + 'a>>;

/// Trait abstracting how a tool invocation is carried out.
pub trait ToolInvoker: Send + Sync {
    /// Run the request to completion.
    ///
    /// If `cancel` fires, the process is killed; output already produced is
    /// still relayed and the result is a [`RelayError::ProcessExit`].
    fn invoke_with_cancel<'a>(
        &'a self,
        request: &'a InvocationRequest,
        cancel: Option<oneshot::Receiver<()>>,
    ) -> InvocationFuture<'a>;

    fn invoke<'a>(&'a self, request: &'a InvocationRequest) -> InvocationFuture<'a> {
        self.invoke_with_cancel(request, None)
    }
}

/// Spawns a real child process and relays its stdout and stderr to a sink.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    sink: Arc<dyn LogSink>,
}

impl ProcessInvoker {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }
}

impl ToolInvoker for ProcessInvoker {
    fn invoke_with_cancel<'a>(
        &'a self,
        request: &'a InvocationRequest,
        cancel: Option<oneshot::Receiver<()>>,
    ) -> InvocationFuture<'a> {
        Box::pin(run_process(request, self.sink.as_ref(), cancel))
    }
}

async fn run_process(
    request: &InvocationRequest,
    sink: &dyn LogSink,
    mut cancel: Option<oneshot::Receiver<()>>,
) -> Result<InvocationSummary> {
    info!(
        tool = %request.tool_name(),
        executable = %request.executable().display(),
        args = ?request.arguments(),
        cwd = %request.working_dir().display(),
        "starting tool process"
    );

    let mut cmd = Command::new(request.executable());
    cmd.args(request.arguments())
        .current_dir(request.working_dir())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| RelayError::Spawn {
        executable: request.executable().to_path_buf(),
        source,
    })?;

    let mut stdout = Pipe::new("stdout", child.stdout.take());
    let mut stderr = Pipe::new("stderr", child.stderr.take());
    let mut relay = OutputRelay::new(sink);

    // Both pipes are read from this one task so sink calls never overlap.
    // The loop ends when the child exits, not when its pipes close: a
    // grandchild that inherited them may keep them open indefinitely.
    let status = loop {
        tokio::select! {
            res = stdout.read(), if stdout.is_open() => stdout.handle(res, &mut relay),

            res = stderr.read(), if stderr.is_open() => stderr.handle(res, &mut relay),

            status = child.wait() => break status?,

            requested = wait_cancel(&mut cancel), if cancel.is_some() => {
                cancel = None;
                if requested {
                    info!(
                        executable = %request.executable().display(),
                        "cancellation requested; killing tool process"
                    );
                    if let Err(e) = child.start_kill() {
                        warn!(error = %e, "failed to kill tool process on cancellation");
                    }
                } else {
                    debug!("cancel channel closed without explicit cancellation");
                }
            }
        }
    };

    // Relay what is still buffered in the pipes, but don't wait on
    // descendants that outlive the child.
    let drained = timeout(DRAIN_TIMEOUT, async {
        while stdout.is_open() || stderr.is_open() {
            tokio::select! {
                res = stdout.read(), if stdout.is_open() => stdout.handle(res, &mut relay),
                res = stderr.read(), if stderr.is_open() => stderr.handle(res, &mut relay),
            }
        }
    })
    .await;
    if drained.is_err() {
        warn!(
            executable = %request.executable().display(),
            "tool output still open after exit; a child process may have outlived it"
        );
    }
    stdout.close(&mut relay);
    stderr.close(&mut relay);

    let summary = relay.summary();
    let code = status.code();

    info!(
        executable = %request.executable().display(),
        exit_code = code.unwrap_or(-1),
        success = status.success(),
        error_lines = summary.error_lines,
        info_lines = summary.info_lines,
        "tool process exited"
    );

    if status.success() {
        Ok(summary)
    } else {
        Err(RelayError::ProcessExit { code })
    }
}

/// One output pipe of the child plus its line buffer.
struct Pipe<R> {
    name: &'static str,
    reader: Option<R>,
    splitter: LineSplitter,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> Pipe<R> {
    fn new(name: &'static str, reader: Option<R>) -> Self {
        Self {
            name,
            reader,
            splitter: LineSplitter::new(),
            buf: vec![0u8; READ_CHUNK],
        }
    }

    fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Closed pipes read as EOF.
    async fn read(&mut self) -> std::io::Result<usize> {
        match &mut self.reader {
            Some(r) => r.read(&mut self.buf).await,
            None => Ok(0),
        }
    }

    fn handle(&mut self, res: std::io::Result<usize>, relay: &mut OutputRelay<'_>) {
        match res {
            Ok(0) => self.close(relay),
            Ok(n) => relay.forward_all(self.splitter.push(&self.buf[..n])),
            Err(e) => {
                warn!(stream = self.name, error = %e, "reading tool output failed; closing stream");
                self.close(relay);
            }
        }
    }

    /// Flush the unterminated tail and stop reading.
    fn close(&mut self, relay: &mut OutputRelay<'_>) {
        relay.forward_all(self.splitter.finish());
        self.reader = None;
    }
}

/// Resolves to `true` on an explicit cancel, `false` if the sender was
/// dropped. Never resolves when there is no channel.
async fn wait_cancel(cancel: &mut Option<oneshot::Receiver<()>>) -> bool {
    match cancel {
        Some(rx) => rx.await.is_ok(),
        None => std::future::pending().await,
    }
}
