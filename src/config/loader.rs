//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

/// Link extraction configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Regular expression a discovered image URL must match.
    #[serde(default)]
    pub image_host_pattern: String,

    /// Attribute holding the lazy-loaded image URL.
    #[serde(default = "default_lazy_src_attribute")]
    pub lazy_src_attribute: String,

    /// Whether to read the plain `src` attribute when the lazy one is missing.
    #[serde(default)]
    pub fallback_to_src: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            image_host_pattern: String::new(),
            lazy_src_attribute: default_lazy_src_attribute(),
            fallback_to_src: false,
        }
    }
}

/// Output location configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory (relative to the working directory) holding per-page folders.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
        }
    }
}

/// Image download configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    /// Per-image request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_lazy_src_attribute() -> String {
    "data-src".to_string()
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_timeout_secs() -> u64 {
    1
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the per-image download timeout.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download.timeout_secs)
    }
}
