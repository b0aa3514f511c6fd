//! Parses crawl result documents written by [`CrawlResultWriter`].
//!
//! [`CrawlResultWriter`]: super::CrawlResultWriter

use super::CrawlResult;
use crate::core::error::{AppError, Result};
use serde::Deserialize;
use serde_json::Deserializer;
use std::io::Read;

/// Reads the first result document from `reader` without taking ownership of it.
///
/// Anything after that document is left unread.
pub fn read_result<R: Read>(reader: &mut R) -> Result<CrawlResult> {
    let mut de = Deserializer::from_reader(&mut *reader);
    CrawlResult::deserialize(&mut de).map_err(AppError::ResultRead)
}

/// Reads every result document from `reader`.
///
/// Appending several results to one file leaves their documents back to back;
/// this returns them in the order they were written.
pub fn read_results<R: Read>(reader: &mut R) -> Result<Vec<CrawlResult>> {
    Deserializer::from_reader(&mut *reader)
        .into_iter::<CrawlResult>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(AppError::ResultRead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_back_to_back_documents() {
        let text = r#"{"wordCounts":{"a":1},"urlsVisited":1}{"wordCounts":{},"urlsVisited":0}
{"urlsVisited":3,"wordCounts":{"b":2}}"#;
        let results = read_results(&mut Cursor::new(text)).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].word_counts()["a"], 1);
        assert!(results[1].word_counts().is_empty());
        assert_eq!(results[2].urls_visited(), 3);
    }

    #[test]
    fn read_result_stops_after_the_first_document() {
        let text = r#"{"wordCounts":{"a":1},"urlsVisited":1}{"wordCounts":{},"urlsVisited":4}"#;
        let mut cursor = Cursor::new(text);
        assert_eq!(read_result(&mut cursor).unwrap().urls_visited(), 1);
        assert_eq!(read_result(&mut cursor).unwrap().urls_visited(), 4);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let text = r#"{"wordCounts":{"a":-1},"urlsVisited":1}"#;
        assert!(matches!(
            read_result(&mut Cursor::new(text)),
            Err(AppError::ResultRead(_))
        ));
    }

    #[test]
    fn missing_members_are_rejected() {
        assert!(read_result(&mut Cursor::new(r#"{"wordCounts":{}}"#)).is_err());
    }
}
