//! Defines the `CrawlResult` produced by a crawl and its JSON form.

pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::{read_result, read_results};
pub use writer::CrawlResultWriter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of a completed crawl: word frequencies and the number of URLs visited.
///
/// Serializes as `{"wordCounts": {...}, "urlsVisited": n}`. Word counts are
/// kept sorted by word so the output is the same for equal results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    word_counts: BTreeMap<String, u64>,
    urls_visited: u64,
}

impl CrawlResult {
    pub fn builder() -> CrawlResultBuilder {
        CrawlResultBuilder::default()
    }

    pub fn word_counts(&self) -> &BTreeMap<String, u64> {
        &self.word_counts
    }

    pub fn urls_visited(&self) -> u64 {
        self.urls_visited
    }
}

/// Staging area for a [`CrawlResult`].
#[derive(Debug, Clone, Default)]
pub struct CrawlResultBuilder {
    word_counts: BTreeMap<String, u64>,
    urls_visited: u64,
}

impl CrawlResultBuilder {
    /// Replaces the word counts. A word given twice keeps its last count.
    pub fn word_counts<I, K>(mut self, counts: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        self.word_counts = counts
            .into_iter()
            .map(|(word, count)| (word.into(), count))
            .collect();
        self
    }

    pub fn urls_visited(mut self, urls_visited: u64) -> Self {
        self.urls_visited = urls_visited;
        self
    }

    pub fn build(&self) -> CrawlResult {
        CrawlResult {
            word_counts: self.word_counts.clone(),
            urls_visited: self.urls_visited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_counts() {
        let result = CrawlResult::builder()
            .word_counts([("foo", 12), ("bar", 1), ("foo", 3)])
            .urls_visited(2)
            .build();
        assert_eq!(result.word_counts().len(), 2);
        assert_eq!(result.word_counts()["foo"], 3);
        assert_eq!(result.urls_visited(), 2);
    }

    #[test]
    fn serializes_with_camel_case_members() {
        let result = CrawlResult::builder()
            .word_counts([("foo", 12)])
            .urls_visited(17)
            .build();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"wordCounts": {"foo": 12}, "urlsVisited": 17})
        );
    }

    #[test]
    fn large_counts_keep_full_precision() {
        let result = CrawlResult::builder()
            .word_counts([("many", u64::MAX)])
            .urls_visited(u64::MAX)
            .build();
        let text = serde_json::to_string(&result).unwrap();
        assert!(text.contains("18446744073709551615"));
        let back: CrawlResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
