//! Image file downloading.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::download::state::LineOutcome;
use crate::error::{Error, Result};
use crate::media::{image_file_name, png_fallback_url, ImageExt};
use crate::output::{create_download_bar, print_info, print_success, print_warning};

/// Minimum file size to show progress bar (5 MB).
pub const PROGRESS_THRESHOLD: u64 = 5 * 1024 * 1024;

/// HTTP client for image downloads, with a short fixed timeout per request.
pub struct Downloader {
    client: Client,
    show_progress: bool,
}

impl Downloader {
    /// Create a new downloader.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            show_progress: true,
        })
    }

    /// Enable or disable progress bars for large images.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Download the image staged at `index`.
    ///
    /// Tries `<index>.jpg` from the staged URL, then `<index>.png` from the
    /// `.png` variant of the URL. Failures are reported, never returned.
    pub async fn download_image(&self, index: usize, url: &str, dir: &Path) -> LineOutcome {
        let jpg_path = dir.join(image_file_name(index, ImageExt::Jpg));
        let first = match self.download_file(url, &jpg_path).await {
            Ok(()) => {
                print_success(&format!("Saved {}", jpg_path.display()));
                return LineOutcome::Saved(ImageExt::Jpg);
            }
            Err(e) => e,
        };

        let retry_url = png_fallback_url(url);
        print_warning(&format!("{}: {}", url, first));
        print_info(&format!("Retrying with .png extension: {}", retry_url));

        let png_path = dir.join(image_file_name(index, ImageExt::Png));
        match self.download_file(&retry_url, &png_path).await {
            Ok(()) => {
                print_success(&format!("Saved {}", png_path.display()));
                LineOutcome::Saved(ImageExt::Png)
            }
            Err(e) => {
                print_warning(&format!("Giving up on #{} ({}): {}", index, retry_url, e));
                LineOutcome::GaveUp
            }
        }
    }

    /// Download one URL to `output_path`.
    ///
    /// Only HTTP 200 counts as success; the file is not created otherwise.
    pub async fn download_file(&self, url: &str, output_path: &Path) -> Result<()> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Download(format!(
                "Received non 200 response code: HTTP {}",
                status
            )));
        }

        let mut file = File::create(output_path).await?;
        let written = self.write_body(response, &mut file).await;
        drop(file);

        if let Err(e) = written {
            if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
                tracing::debug!(
                    "Failed to remove partial file {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            return Err(e);
        }

        Ok(())
    }

    /// Stream a response body into a file.
    async fn write_body(&self, response: Response, file: &mut File) -> Result<()> {
        let content_length = response.content_length();
        let progress = if self.show_progress
            && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
        {
            Some(create_download_bar(content_length.unwrap_or(0)))
        } else {
            None
        };

        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(())
    }
}
