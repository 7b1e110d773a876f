//! The scrape-and-download run for one page.

use std::path::Path;

use url::Url;

use crate::config::Config;
use crate::download::{download_list, DownloadState, Downloader};
use crate::error::Result;
use crate::fs::{prepare_target_dir, sanitize_title, StagingFile};
use crate::media::{ExtractOptions, HostPattern, LinkExtractor};
use crate::output::{create_spinner, print_info};
use crate::page::{Page, PageFetcher};

/// Fetch `url`, stage its matching image URLs and download them under `cwd`.
pub async fn scrape_page(
    config: &Config,
    url: &Url,
    cwd: &Path,
    quiet: bool,
) -> Result<DownloadState> {
    let extractor = LinkExtractor::new(
        HostPattern::new(&config.scrape.image_host_pattern)?,
        ExtractOptions::from(&config.scrape),
    );
    let fetcher = PageFetcher::new(&config.download.user_agent)?;
    let downloader = Downloader::new(config.download_timeout(), &config.download.user_agent)?
        .with_progress(!quiet);

    let body = if quiet {
        fetcher.fetch(url).await?
    } else {
        let spinner = create_spinner(&format!("Fetching {}", url));
        let body = fetcher.fetch(url).await;
        spinner.finish_and_clear();
        body?
    };

    // The parsed tree is dropped before the next await.
    let (urls, title) = {
        let page = Page::parse(&body);
        (extractor.extract(&page), sanitize_title(&page.heading_text()))
    };
    print_info(&format!("Title: {}", title));
    print_info(&format!("Found {} images", urls.len()));

    let target_dir = prepare_target_dir(cwd, &config.storage.store_dir, &title).await?;
    print_info(&format!("Saving to {}", target_dir.display()));

    let mut staging = StagingFile::create(&target_dir).await?;
    staging.write_urls(&urls).await?;

    let state = download_list(&downloader, staging.reader(), &target_dir, urls.len()).await?;
    Ok(state)
}
