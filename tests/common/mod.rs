//! Shared helpers for the integration tests

use crawl_json_core::CrawlResult;
use std::io::{self, Write};

/// The result used by the formatting scenarios: three words, 17 URLs.
#[allow(dead_code)]
pub fn sample_result() -> CrawlResult {
    CrawlResult::builder()
        .word_counts([("foo", 12), ("bar", 1), ("foobar", 98)])
        .urls_visited(17)
        .build()
}

/// In-memory writer that remembers whether its owner closed it.
///
/// Components only ever borrow it, so `closed` can only flip when the test
/// calls [`CloseableStringWriter::close`] itself.
#[allow(dead_code)]
#[derive(Default)]
pub struct CloseableStringWriter {
    buffer: Vec<u8>,
    closed: bool,
}

#[allow(dead_code)]
impl CloseableStringWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

impl Write for CloseableStringWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "writer closed"));
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "writer closed"));
        }
        Ok(())
    }
}
