//! Defines the immutable `CrawlerConfiguration` and its defaults.
//! Submodules handle the JSON document, building, loading, and validation.

pub(crate) mod builder;
pub(crate) mod file;
pub(crate) mod loading;
pub(crate) mod validation;

pub use builder::CrawlerConfigurationBuilder;
pub use file::ConfigFile;
pub use loading::ConfigurationLoader;
pub use validation::host_parallelism;

use regex::Regex;
use std::time::Duration;

/// Timeout applied when the document does not set `timeoutSeconds`.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 1;

/// Crawl parameters handed to the crawl engine. Fixed once built.
#[derive(Clone)]
pub struct CrawlerConfiguration {
    pub(crate) start_pages: Vec<String>,
    pub(crate) ignored_urls: Vec<Regex>,
    pub(crate) ignored_words: Vec<Regex>,
    pub(crate) parallelism: usize,
    pub(crate) implementation_override: String,
    pub(crate) max_depth: u64,
    pub(crate) timeout: Duration,
    pub(crate) popular_word_count: u64,
    pub(crate) result_path: String,
    pub(crate) profile_output_path: String,
}

impl CrawlerConfiguration {
    pub fn builder() -> CrawlerConfigurationBuilder {
        CrawlerConfigurationBuilder::new()
    }

    /// Pages the crawl starts from, in document order.
    pub fn start_pages(&self) -> &[String] {
        &self.start_pages
    }

    /// URLs matching any of these patterns are not visited.
    pub fn ignored_urls(&self) -> &[Regex] {
        &self.ignored_urls
    }

    /// Words matching any of these patterns are not counted.
    pub fn ignored_words(&self) -> &[Regex] {
        &self.ignored_words
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Fully-qualified name of a crawler implementation to force, or empty.
    pub fn implementation_override(&self) -> &str {
        &self.implementation_override
    }

    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn popular_word_count(&self) -> u64 {
        self.popular_word_count
    }

    /// Where the crawl result should be written. Empty means not persisted.
    pub fn result_path(&self) -> &str {
        &self.result_path
    }

    /// Where profiling data should be written. Empty means not persisted.
    pub fn profile_output_path(&self) -> &str {
        &self.profile_output_path
    }

    /// A builder seeded with this configuration's values.
    pub fn to_builder(&self) -> CrawlerConfigurationBuilder {
        CrawlerConfigurationBuilder {
            start_pages: self.start_pages.clone(),
            ignored_urls: patterns(&self.ignored_urls),
            ignored_words: patterns(&self.ignored_words),
            parallelism: Some(self.parallelism as i64),
            implementation_override: self.implementation_override.clone(),
            max_depth: self.max_depth as i64,
            timeout_seconds: self.timeout.as_secs() as i64,
            popular_word_count: self.popular_word_count as i64,
            result_path: self.result_path.clone(),
            profile_output_path: self.profile_output_path.clone(),
        }
    }

    /// The configuration as a fully populated JSON document.
    pub fn to_file(&self) -> ConfigFile {
        ConfigFile {
            start_pages: Some(self.start_pages.clone()),
            ignored_urls: Some(patterns(&self.ignored_urls)),
            ignored_words: Some(patterns(&self.ignored_words)),
            parallelism: Some(self.parallelism as i64),
            implementation_override: Some(self.implementation_override.clone()),
            max_depth: Some(self.max_depth as i64),
            timeout_seconds: Some(self.timeout.as_secs() as i64),
            popular_word_count: Some(self.popular_word_count as i64),
            result_path: Some(self.result_path.clone()),
            profile_output_path: Some(self.profile_output_path.clone()),
            unknown: Default::default(),
        }
    }
}

fn patterns(regexes: &[Regex]) -> Vec<String> {
    regexes.iter().map(|r| r.as_str().to_string()).collect()
}

impl PartialEq for CrawlerConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.start_pages == other.start_pages
            && patterns(&self.ignored_urls) == patterns(&other.ignored_urls)
            && patterns(&self.ignored_words) == patterns(&other.ignored_words)
            && self.parallelism == other.parallelism
            && self.implementation_override == other.implementation_override
            && self.max_depth == other.max_depth
            && self.timeout == other.timeout
            && self.popular_word_count == other.popular_word_count
            && self.result_path == other.result_path
            && self.profile_output_path == other.profile_output_path
    }
}

impl std::fmt::Debug for CrawlerConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrawlerConfiguration")
            .field("start_pages", &self.start_pages)
            .field("ignored_urls", &patterns(&self.ignored_urls))
            .field("ignored_words", &patterns(&self.ignored_words))
            .field("parallelism", &self.parallelism)
            .field("implementation_override", &self.implementation_override)
            .field("max_depth", &self.max_depth)
            .field("timeout", &self.timeout)
            .field("popular_word_count", &self.popular_word_count)
            .field("result_path", &self.result_path)
            .field("profile_output_path", &self.profile_output_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_builder_rebuilds_an_equal_configuration() {
        let config = CrawlerConfiguration::builder()
            .add_start_pages(["http://example.com", "http://example.org"])
            .add_ignored_urls([r"http://example\.com/private/.*"])
            .implementation_override("com.example.SequentialCrawler")
            .max_depth(2)
            .timeout_seconds(30)
            .result_path("result.json")
            .build()
            .unwrap();
        assert_eq!(config.to_builder().build().unwrap(), config);
    }

    #[test]
    fn to_file_round_trips_through_json() {
        let config = CrawlerConfiguration::builder()
            .add_start_pages(["http://example.com"])
            .add_ignored_words(["^the$"])
            .popular_word_count(3)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config.to_file()).unwrap();
        let file: ConfigFile = serde_json::from_str(&json).unwrap();
        let rebuilt = CrawlerConfigurationBuilder::from(file).build().unwrap();
        assert_eq!(rebuilt, config);
    }

    #[test]
    fn debug_shows_pattern_sources() {
        let config = CrawlerConfiguration::builder()
            .add_start_pages(["http://example.com"])
            .add_ignored_words(["^a+$"])
            .build()
            .unwrap();
        assert!(format!("{config:?}").contains("^a+$"));
    }
}
