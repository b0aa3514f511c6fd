//! Reads a JSON configuration document into a [`CrawlerConfiguration`].

use super::builder::CrawlerConfigurationBuilder;
use super::file::ConfigFile;
use super::CrawlerConfiguration;
use crate::core::error::ConfigLoadError;
use serde::Deserialize;
use serde_json::Deserializer;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Loads a crawler configuration from a file path or an open reader.
#[derive(Debug, Clone)]
pub struct ConfigurationLoader {
    path: PathBuf,
}

impl ConfigurationLoader {
    /// Creates a loader bound to the configuration file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the bound file, parses it, and closes it again before returning.
    pub fn load(&self) -> Result<CrawlerConfiguration, ConfigLoadError> {
        tracing::debug!("Opening configuration file {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| ConfigLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let config = Self::read(&mut reader).map_err(|err| match err {
            // Read failures mid-document still belong to the file.
            ConfigLoadError::Json(json_err) if json_err.is_io() => ConfigLoadError::Io {
                path: self.path.clone(),
                source: std::io::Error::new(
                    json_err.io_error_kind().unwrap_or(std::io::ErrorKind::Other),
                    json_err,
                ),
            },
            other => other,
        })?;

        tracing::info!(
            "Loaded configuration from {} ({} start page(s))",
            self.path.display(),
            config.start_pages().len()
        );
        Ok(config)
    }

    /// Parses a configuration document from `reader`.
    ///
    /// Only the first JSON value is consumed; anything after it stays in the
    /// reader. The reader is only borrowed, so the caller keeps ownership and
    /// may keep using it afterwards, whether or not parsing succeeded.
    pub fn read<R: Read>(reader: &mut R) -> Result<CrawlerConfiguration, ConfigLoadError> {
        let mut de = Deserializer::from_reader(&mut *reader);
        let file = ConfigFile::deserialize(&mut de)?;
        for key in file.unknown_keys() {
            tracing::warn!("Ignoring unknown configuration key '{}'", key);
        }
        CrawlerConfigurationBuilder::from(file).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_a_full_document() {
        let json = r#"{
            "startPages": ["http://example.com", "http://example.com/foo"],
            "ignoredUrls": ["http://example\\.com/.*"],
            "ignoredWords": ["^.{1,3}$"],
            "parallelism": 4,
            "implementationOverride": "com.example.ParallelCrawler",
            "maxDepth": 10,
            "timeoutSeconds": 2,
            "popularWordCount": 3,
            "profileOutputPath": "profileData.txt",
            "resultPath": "crawlResults.json"
        }"#;
        let config = ConfigurationLoader::read(&mut Cursor::new(json)).unwrap();

        assert_eq!(
            config.start_pages(),
            ["http://example.com", "http://example.com/foo"]
        );
        assert_eq!(config.ignored_urls()[0].as_str(), r"http://example\.com/.*");
        assert!(config.ignored_words()[0].is_match("the"));
        assert_eq!(config.parallelism(), 4);
        assert_eq!(config.implementation_override(), "com.example.ParallelCrawler");
        assert_eq!(config.max_depth(), 10);
        assert_eq!(config.timeout(), std::time::Duration::from_secs(2));
        assert_eq!(config.popular_word_count(), 3);
        assert_eq!(config.profile_output_path(), "profileData.txt");
        assert_eq!(config.result_path(), "crawlResults.json");
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let err = ConfigurationLoader::read(&mut Cursor::new("{\"startPages\": [")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Json(_)));
    }

    #[test]
    fn empty_input_is_a_load_error() {
        let err = ConfigurationLoader::read(&mut Cursor::new("   ")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Json(ref e) if e.is_eof()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let loader = ConfigurationLoader::new("/definitely/not/here/config.json");
        match loader.load() {
            Err(ConfigLoadError::Io { path, .. }) => assert_eq!(path, loader.path()),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
