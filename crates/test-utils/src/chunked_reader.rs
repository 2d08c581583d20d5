use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

/// An `AsyncRead` that hands out preset chunks, one per read.
///
/// Lets tests control exactly where the byte stream is cut, which a real
/// pipe won't.
#[derive(Debug, Default)]
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl ChunkedReader {
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }

    /// Cut `data` at the given byte offsets (out-of-range offsets are ignored).
    pub fn split_at(data: &[u8], cuts: &[usize]) -> Self {
        let mut points: Vec<usize> = cuts.iter().copied().filter(|c| *c < data.len()).collect();
        points.sort_unstable();
        points.dedup();

        let mut chunks = Vec::new();
        let mut start = 0;
        for cut in points {
            chunks.push(data[start..cut].to_vec());
            start = cut;
        }
        chunks.push(data[start..].to_vec());
        Self::new(chunks)
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        // Skip empty chunks; an empty read would look like EOF.
        while let Some(chunk) = self.chunks.pop_front() {
            if chunk.is_empty() {
                continue;
            }
            let n = chunk.len().min(buf.remaining());
            buf.put_slice(&chunk[..n]);
            if n < chunk.len() {
                self.chunks.push_front(chunk[n..].to_vec());
            }
            return Poll::Ready(Ok(()));
        }
        Poll::Ready(Ok(()))
    }
}
