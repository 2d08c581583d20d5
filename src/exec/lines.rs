// src/exec/lines.rs

//! Reassembly of raw output chunks into lines.

/// Buffers bytes from one output stream and hands back complete lines.
///
/// Chunks may end anywhere, including in the middle of a multi-byte UTF-8
/// sequence, so the buffer holds raw bytes and only decodes once a `\n` has
/// been seen. Returned lines are trimmed; empty ones are never returned.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: Vec<u8>,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = chunk;

        while let Some(pos) = rest.iter().position(|b| *b == b'\n') {
            self.pending.extend_from_slice(&rest[..pos]);
            if let Some(line) = take_line(&mut self.pending) {
                lines.push(line);
            }
            rest = &rest[pos + 1..];
        }

        self.pending.extend_from_slice(rest);
        lines
    }

    /// Flush whatever is left after the stream ended without a final `\n`.
    pub fn finish(&mut self) -> Option<String> {
        take_line(&mut self.pending)
    }

    /// Bytes received since the last newline.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let raw = std::mem::take(buf);
    let text = String::from_utf8_lossy(&raw);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a complete buffer in one go. Equivalent to a single `push` followed
/// by `finish`.
pub fn split_lines(data: &[u8]) -> Vec<String> {
    let mut splitter = LineSplitter::new();
    let mut lines = splitter.push(data);
    lines.extend(splitter.finish());
    lines
}
