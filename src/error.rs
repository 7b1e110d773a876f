//! Error types for the gallery-scraper application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Argument errors
    #[error("Invalid argument: {0}")]
    Argument(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Page errors
    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    #[error("Failed to parse page: {0}")]
    Parse(String),

    // File system errors
    #[error("Failed to create output directory: {0}")]
    Directory(String),

    #[error("Failed to open staging file: {0}")]
    Staging(String),

    #[error("Failed to read staged URLs: {0}")]
    Scan(String),

    // Download errors (logged per image, never fatal)
    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_ERROR: i32 = 1;
    pub const ARGUMENT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const PAGE_ERROR: i32 = 4;
    pub const FILESYSTEM_ERROR: i32 = 5;
}
