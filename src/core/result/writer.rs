//! Writes a [`CrawlResult`] as JSON to a file path or an open writer.

use super::CrawlResult;
use crate::core::error::ResultWriteError;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes one [`CrawlResult`] to a destination.
#[derive(Debug, Clone, Copy)]
pub struct CrawlResultWriter<'a> {
    result: &'a CrawlResult,
}

impl<'a> CrawlResultWriter<'a> {
    pub fn new(result: &'a CrawlResult) -> Self {
        Self { result }
    }

    /// Appends the JSON document to the file at `path`, creating it if needed.
    ///
    /// Existing content is never truncated. The file is opened and closed
    /// within this call. Failures are logged here and returned so the caller
    /// can decide whether losing the persisted copy matters.
    pub fn write_path(&self, path: impl AsRef<Path>) -> Result<(), ResultWriteError> {
        let path = path.as_ref();
        let outcome = self.append_to(path);
        match &outcome {
            Ok(()) => tracing::info!(
                "Wrote crawl result ({} words, {} urls) to {}",
                self.result.word_counts().len(),
                self.result.urls_visited(),
                path.display()
            ),
            Err(e) => tracing::error!("Failed to write crawl result to file: {}", e),
        }
        outcome
    }

    fn append_to(&self, path: &Path) -> Result<(), ResultWriteError> {
        let io_err = |source| ResultWriteError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(|err| match err {
            ResultWriteError::Stream(source) => io_err(source),
            other => other,
        })?;
        writer.flush().map_err(io_err)
    }

    /// Writes exactly one JSON document to `writer` and nothing else.
    ///
    /// The writer stays with the caller, who is responsible for flushing and
    /// closing it.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ResultWriteError> {
        tracing::debug!("Serializing crawl result");
        serde_json::to_writer(&mut *writer, self.result)?;
        Ok(())
    }

    /// The JSON document as a string.
    pub fn to_json_string(&self) -> Result<String, ResultWriteError> {
        serde_json::to_string(self.result).map_err(ResultWriteError::Json)
    }
}
