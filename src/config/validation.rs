//! Configuration and argument validation logic.

use std::path::Component;

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum per-image timeout in seconds.
const MIN_TIMEOUT_SECS: u64 = 1;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host_pattern(&config.scrape.image_host_pattern)?;
    validate_lazy_attribute(&config.scrape.lazy_src_attribute)?;
    validate_store_dir(&config.storage.store_dir.to_string_lossy())?;
    validate_timeout(config.download.timeout_secs)?;

    Ok(())
}

/// Validate the image host pattern.
pub fn validate_host_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::MissingConfig("image_host_pattern".to_string()));
    }

    Regex::new(pattern).map_err(|e| Error::ConfigValidation {
        field: "image_host_pattern".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Validate the lazy-load attribute name.
pub fn validate_lazy_attribute(attribute: &str) -> Result<()> {
    if attribute.trim().is_empty() {
        return Err(Error::MissingConfig("lazy_src_attribute".to_string()));
    }

    if attribute.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: "lazy_src_attribute".to_string(),
            message: format!("Attribute name '{}' contains whitespace", attribute),
        });
    }

    Ok(())
}

/// Validate the store root directory.
pub fn validate_store_dir(store_dir: &str) -> Result<()> {
    if store_dir.trim().is_empty() {
        return Err(Error::MissingConfig("store_dir".to_string()));
    }

    if std::path::Path::new(store_dir)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(Error::ConfigValidation {
            field: "store_dir".to_string(),
            message: format!("Path traversal detected: '{}'", store_dir),
        });
    }

    Ok(())
}

/// Validate the per-image timeout.
pub fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs < MIN_TIMEOUT_SECS {
        return Err(Error::ConfigValidation {
            field: "timeout_secs".to_string(),
            message: format!(
                "Timeout must be at least {} second (got {})",
                MIN_TIMEOUT_SECS, timeout_secs
            ),
        });
    }

    Ok(())
}

/// Parse the target page address given on the command line.
///
/// Only absolute `http`/`https` URLs with a host are accepted.
pub fn parse_target_url(input: &str) -> Result<Url> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Argument(
            "Set the target URL as the first argument".to_string(),
        ));
    }

    let url = Url::parse(input)
        .map_err(|e| Error::Argument(format!("'{}' is not a valid URL: {}", input, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Argument(format!(
            "Unsupported URL scheme '{}' (expected http or https)",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::Argument(format!("URL has no host: {}", input)));
    }

    Ok(url)
}
