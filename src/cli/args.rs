//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Gallery page image scraper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "gallery-scraper",
    version,
    about = "Download the images of a gallery page",
    long_about = "Fetches one web page, collects the image URLs that match the configured host \
                  pattern and downloads them into a folder named after the page title.\n\n\
                  Images are saved as <index>.jpg, falling back to <index>.png when the .jpg \
                  address is not available."
)]
pub struct Args {
    /// Target page URL.
    pub url: String,

    /// Path to configuration file.
    #[arg(short, long, default_value = "gallery-scraper.toml")]
    pub config: PathBuf,

    /// Regular expression an image URL must match to be downloaded.
    #[arg(short, long, env = "GALLERY_IMAGE_PATTERN")]
    pub pattern: Option<String>,

    /// Root directory for per-page image folders.
    #[arg(short, long = "store-dir", env = "GALLERY_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Per-image request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Use the plain `src` attribute when the lazy-load attribute is missing.
    #[arg(long)]
    pub fallback_to_src: bool,

    /// Hide the fetch spinner.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(pattern) = &self.pattern {
            config.scrape.image_host_pattern = pattern.clone();
        }

        if let Some(store_dir) = &self.store_dir {
            config.storage.store_dir = store_dir.clone();
        }

        if let Some(timeout) = self.timeout {
            config.download.timeout_secs = timeout;
        }

        // Boolean flags (only override if set to non-default)
        if self.fallback_to_src {
            config.scrape.fallback_to_src = true;
        }
    }
}
