use std::sync::{Arc, Mutex};

use tscrelay::sink::LogSink;

/// One call made on a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Error(String),
    Info(String),
}

impl SinkCall {
    pub fn error(line: &str) -> Self {
        SinkCall::Error(line.to_string())
    }

    pub fn info(line: &str) -> Self {
        SinkCall::Info(line.to_string())
    }

    pub fn line(&self) -> &str {
        match self {
            SinkCall::Error(l) | SinkCall::Info(l) => l,
        }
    }
}

/// A sink that remembers every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.line().to_string()).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SinkCall::Error(l) => Some(l),
                SinkCall::Info(_) => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

impl LogSink for RecordingSink {
    fn log_error(&self, line: &str) {
        self.calls.lock().unwrap().push(SinkCall::error(line));
    }

    fn log_info(&self, line: &str) {
        self.calls.lock().unwrap().push(SinkCall::info(line));
    }
}
