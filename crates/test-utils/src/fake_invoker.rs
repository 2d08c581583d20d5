use std::io;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tscrelay::errors::RelayError;
use tscrelay::exec::{InvocationFuture, InvocationRequest, OutputRelay, ToolInvoker, split_lines};
use tscrelay::sink::LogSink;

/// How a [`FakeInvoker`] run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOutcome {
    Success,
    Exit(Option<i32>),
    SpawnFailure,
}

/// A fake invoker that:
/// - records every request it was asked to run
/// - relays a canned output buffer through the real classifier into `sink`
/// - finishes with the configured outcome.
#[derive(Debug)]
pub struct FakeInvoker {
    sink: Arc<dyn LogSink>,
    output: Vec<u8>,
    outcome: FakeOutcome,
    requests: Arc<Mutex<Vec<InvocationRequest>>>,
}

impl FakeInvoker {
    pub fn new(sink: Arc<dyn LogSink>, output: impl Into<Vec<u8>>, outcome: FakeOutcome) -> Self {
        Self {
            sink,
            output: output.into(),
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded requests.
    pub fn requests(&self) -> Arc<Mutex<Vec<InvocationRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl ToolInvoker for FakeInvoker {
    fn invoke_with_cancel<'a>(
        &'a self,
        request: &'a InvocationRequest,
        _cancel: Option<oneshot::Receiver<()>>,
    ) -> InvocationFuture<'a> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());

            if self.outcome == FakeOutcome::SpawnFailure {
                return Err(RelayError::Spawn {
                    executable: request.executable().to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "fake spawn failure"),
                });
            }

            let mut relay = OutputRelay::new(self.sink.as_ref());
            relay.forward_all(split_lines(&self.output));

            match self.outcome {
                FakeOutcome::Exit(code) => Err(RelayError::ProcessExit { code }),
                _ => Ok(relay.summary()),
            }
        })
    }
}
