//! Gallery Scraper - download the images of a single web page
//!
//! One run fetches one page, collects the `img` URLs that match a configured
//! host pattern and saves them into a folder named after the page's `h1`.
//!
//! # Pipeline
//!
//! - Fetch the page and parse it into a document tree
//! - Extract lazy-load image URLs matching the host pattern
//! - Create `<store>/<title>` (falling back to `<store>`)
//! - Stage the URLs in a temporary `output.txt`
//! - Download each staged URL as `<index>.jpg`, retrying once as `<index>.png`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gallery_scraper::{config::parse_target_url, scrape_page, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("gallery-scraper.toml"))?;
//!     let url = parse_target_url("https://example.com/gallery/42")?;
//!     let state = scrape_page(&config, &url, &std::env::current_dir()?, false).await?;
//!     println!("{} images saved", state.total_downloaded());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod page;
pub mod pipeline;

// Re-exports for convenience
pub use config::Config;
pub use download::{download_list, DownloadState, Downloader, LineOutcome};
pub use error::{Error, Result};
pub use media::{png_fallback_url, HostPattern, ImageExt, LinkExtractor};
pub use page::{Page, PageFetcher};
pub use pipeline::scrape_page;
