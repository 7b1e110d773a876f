//! Configuration module for the gallery-scraper.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration and argument validation

pub mod loader;
pub mod validation;

pub use loader::{Config, DownloadConfig, ScrapeConfig, StorageConfig};
pub use validation::{parse_target_url, validate_config};
