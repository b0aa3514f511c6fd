//! Mutable staging area that produces an immutable [`CrawlerConfiguration`].

use super::file::ConfigFile;
use super::validation;
use super::{CrawlerConfiguration, DEFAULT_TIMEOUT_SECONDS};
use crate::core::error::ConfigLoadError;
use std::time::Duration;

/// Accumulates configuration values before [`build`](Self::build) checks them.
///
/// Values are kept in their document form (signed integers, pattern
/// strings) so that range and regex errors surface from `build` rather than
/// from the setters.
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlerConfigurationBuilder {
    pub(crate) start_pages: Vec<String>,
    pub(crate) ignored_urls: Vec<String>,
    pub(crate) ignored_words: Vec<String>,
    pub(crate) parallelism: Option<i64>,
    pub(crate) implementation_override: String,
    pub(crate) max_depth: i64,
    pub(crate) timeout_seconds: i64,
    pub(crate) popular_word_count: i64,
    pub(crate) result_path: String,
    pub(crate) profile_output_path: String,
}

impl Default for CrawlerConfigurationBuilder {
    fn default() -> Self {
        Self {
            start_pages: Vec::new(),
            ignored_urls: Vec::new(),
            ignored_words: Vec::new(),
            parallelism: None,
            implementation_override: String::new(),
            max_depth: 0,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS as i64,
            popular_word_count: 0,
            result_path: String::new(),
            profile_output_path: String::new(),
        }
    }
}

fn push_unique(target: &mut Vec<String>, values: impl IntoIterator<Item = impl Into<String>>) {
    for value in values {
        let value = value.into();
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

impl CrawlerConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends start pages, keeping their order and skipping duplicates.
    pub fn add_start_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.start_pages, pages);
        self
    }

    pub fn add_ignored_urls<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.ignored_urls, patterns);
        self
    }

    pub fn add_ignored_words<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.ignored_words, patterns);
        self
    }

    /// Values of zero or below mean "use the host's available parallelism".
    pub fn parallelism(mut self, parallelism: i64) -> Self {
        self.parallelism = Some(parallelism);
        self
    }

    pub fn implementation_override(mut self, name: impl Into<String>) -> Self {
        self.implementation_override = name.into();
        self
    }

    pub fn max_depth(mut self, max_depth: i64) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn timeout_seconds(mut self, seconds: i64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn popular_word_count(mut self, count: i64) -> Self {
        self.popular_word_count = count;
        self
    }

    pub fn result_path(mut self, path: impl Into<String>) -> Self {
        self.result_path = path.into();
        self
    }

    pub fn profile_output_path(mut self, path: impl Into<String>) -> Self {
        self.profile_output_path = path.into();
        self
    }

    /// Validates the staged values and produces the immutable configuration.
    ///
    /// The builder is left untouched, so building twice from the same state
    /// yields equal configurations.
    pub fn build(&self) -> Result<CrawlerConfiguration, ConfigLoadError> {
        validation::require_start_pages(&self.start_pages)?;
        let max_depth = validation::non_negative("maxDepth", self.max_depth)?;
        let timeout = validation::positive("timeoutSeconds", self.timeout_seconds)?;
        let popular_word_count =
            validation::non_negative("popularWordCount", self.popular_word_count)?;
        let ignored_urls = validation::compile_patterns("ignoredUrls", &self.ignored_urls)?;
        let ignored_words = validation::compile_patterns("ignoredWords", &self.ignored_words)?;

        Ok(CrawlerConfiguration {
            start_pages: self.start_pages.clone(),
            ignored_urls,
            ignored_words,
            parallelism: validation::resolve_parallelism(self.parallelism),
            implementation_override: self.implementation_override.clone(),
            max_depth,
            timeout: Duration::from_secs(timeout),
            popular_word_count,
            result_path: self.result_path.clone(),
            profile_output_path: self.profile_output_path.clone(),
        })
    }
}

impl From<ConfigFile> for CrawlerConfigurationBuilder {
    fn from(file: ConfigFile) -> Self {
        let mut builder = CrawlerConfigurationBuilder::new()
            .add_start_pages(file.start_pages.unwrap_or_default())
            .add_ignored_urls(file.ignored_urls.unwrap_or_default())
            .add_ignored_words(file.ignored_words.unwrap_or_default());
        builder.parallelism = file.parallelism;
        if let Some(name) = file.implementation_override {
            builder.implementation_override = name;
        }
        if let Some(depth) = file.max_depth {
            builder.max_depth = depth;
        }
        if let Some(seconds) = file.timeout_seconds {
            builder.timeout_seconds = seconds;
        }
        if let Some(count) = file.popular_word_count {
            builder.popular_word_count = count;
        }
        if let Some(path) = file.result_path {
            builder.result_path = path;
        }
        if let Some(path) = file.profile_output_path {
            builder.profile_output_path = path;
        }
        builder
    }
}
