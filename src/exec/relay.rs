// src/exec/relay.rs

//! Classify-and-forward step shared by the process invoker and tests.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::classify::{Classification, classify};
use crate::exec::lines::LineSplitter;
use crate::sink::LogSink;

/// Size of a single read from a child pipe.
pub const READ_CHUNK: usize = 8 * 1024;

/// Line counts for a finished invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvocationSummary {
    pub error_lines: usize,
    pub info_lines: usize,
}

impl InvocationSummary {
    pub fn total_lines(&self) -> usize {
        self.error_lines + self.info_lines
    }
}

/// Routes lines to a sink, one call per line, keeping count as it goes.
#[derive(Debug)]
pub struct OutputRelay<'a> {
    sink: &'a dyn LogSink,
    summary: InvocationSummary,
}

impl<'a> OutputRelay<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self {
            sink,
            summary: InvocationSummary::default(),
        }
    }

    pub fn forward(&mut self, line: &str) {
        match classify(line) {
            Classification::Error => {
                self.summary.error_lines += 1;
                self.sink.log_error(line);
            }
            Classification::Info => {
                self.summary.info_lines += 1;
                self.sink.log_info(line);
            }
        }
    }

    pub fn forward_all<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        for line in lines {
            self.forward(&line);
        }
    }

    pub fn summary(&self) -> InvocationSummary {
        self.summary
    }
}

/// Drain a single reader to EOF, relaying every line it produces.
///
/// Used for streams that don't need to be interleaved with anything else.
pub async fn relay_reader<R>(
    mut reader: R,
    sink: &dyn LogSink,
) -> std::io::Result<InvocationSummary>
where
    R: AsyncRead + Unpin,
{
    let mut relay = OutputRelay::new(sink);
    let mut splitter = LineSplitter::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        relay.forward_all(splitter.push(&buf[..n]));
    }
    relay.forward_all(splitter.finish());

    Ok(relay.summary())
}
