//! Range and presence checks applied when a builder is finished.

use crate::core::error::ConfigLoadError;
use regex::Regex;
use std::num::NonZeroUsize;

pub(crate) fn require_start_pages(pages: &[String]) -> Result<(), ConfigLoadError> {
    if pages.is_empty() {
        return Err(ConfigLoadError::MissingStartPages);
    }
    Ok(())
}

pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<u64, ConfigLoadError> {
    u64::try_from(value).map_err(|_| ConfigLoadError::InvalidValue {
        field,
        reason: format!("must not be negative, got {value}"),
    })
}

pub(crate) fn positive(field: &'static str, value: i64) -> Result<u64, ConfigLoadError> {
    if value <= 0 {
        return Err(ConfigLoadError::InvalidValue {
            field,
            reason: format!("must be greater than zero, got {value}"),
        });
    }
    Ok(value as u64)
}

/// Compiles every pattern of `field`, failing on the first invalid one.
pub(crate) fn compile_patterns(
    field: &'static str,
    patterns: &[String],
) -> Result<Vec<Regex>, ConfigLoadError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ConfigLoadError::InvalidPattern {
                field,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Requested parallelism, or the host's available parallelism when the
/// request is absent or not positive.
pub(crate) fn resolve_parallelism(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => host_parallelism(),
    }
}

/// Parallelism of the current host, never less than one.
pub fn host_parallelism() -> usize {
    std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .max(1)
}
