//! Loads JSON crawl configurations and writes JSON crawl results.
//!
//! The crawl engine itself lives elsewhere: it receives a
//! [`CrawlerConfiguration`] from [`ConfigurationLoader`] and hands back a
//! [`CrawlResult`] for [`CrawlResultWriter`] to persist.

pub mod core;
pub mod logging;

pub use crate::core::config::{
    host_parallelism, ConfigFile, ConfigurationLoader, CrawlerConfiguration,
    CrawlerConfigurationBuilder, DEFAULT_TIMEOUT_SECONDS,
};
pub use crate::core::error::{AppError, ConfigLoadError, Result, ResultWriteError};
pub use crate::core::result::{
    read_result, read_results, CrawlResult, CrawlResultBuilder, CrawlResultWriter,
};
