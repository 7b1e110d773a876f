//! Downloading the staged URL list.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::download::image::Downloader;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::output::print_info;

/// Download every URL read from `reader` into `dir`.
///
/// The Nth non-blank line is saved as `N.jpg` or `N.png`; a line whose
/// downloads fail still uses up its index. Only read errors abort.
pub async fn download_list<R>(
    downloader: &Downloader,
    reader: R,
    dir: &Path,
    total: usize,
) -> Result<DownloadState>
where
    R: AsyncBufRead + Unpin,
{
    let mut state = DownloadState::new(dir.to_path_buf());
    let mut lines = reader.lines();
    let mut index = 1;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| Error::Scan(e.to_string()))?
    {
        if line.trim().is_empty() {
            continue;
        }

        print_info(&format!("[{}/{}] {}", index, total, line));
        let outcome = downloader.download_image(index, &line, dir).await;
        state.record(outcome);
        index += 1;
    }

    tracing::info!(
        "Download complete: {} saved, {} via .png, {} failed",
        state.total_downloaded(),
        state.saved_fallback,
        state.gave_up
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::state::LineOutcome;
    use crate::media::ImageExt;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn downloader() -> Downloader {
        Downloader::new(Duration::from_secs(1), "test-agent")
            .unwrap()
            .with_progress(false)
    }

    #[tokio::test]
    async fn test_empty_list_downloads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reader: &[u8] = b"";

        let state = download_list(&downloader(), reader, dir.path(), 0)
            .await
            .unwrap();

        assert_eq!(state.attempted(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_every_line_consumes_an_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"one".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"three".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let list = format!(
            "{uri}/1.jpg\n{uri}/2.jpg\n\n{uri}/3.jpg\n",
            uri = server.uri()
        );
        let dir = tempfile::tempdir().unwrap();

        let state = download_list(&downloader(), list.as_bytes(), dir.path(), 3)
            .await
            .unwrap();

        assert_eq!(
            state.outcomes,
            vec![
                LineOutcome::Saved(ImageExt::Jpg),
                LineOutcome::GaveUp,
                LineOutcome::Saved(ImageExt::Png),
            ]
        );
        assert_eq!(std::fs::read(dir.path().join("1.jpg")).unwrap(), b"one");
        assert!(!dir.path().join("2.jpg").exists());
        assert!(!dir.path().join("2.png").exists());
        assert_eq!(std::fs::read(dir.path().join("3.png")).unwrap(), b"three");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_fatal() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let list = format!("{uri}/a.jpg\n{uri}/b.jpg\n", uri = uri);
        let dir = tempfile::tempdir().unwrap();

        let state = download_list(&downloader(), list.as_bytes(), dir.path(), 2)
            .await
            .unwrap();

        assert_eq!(state.attempted(), 2);
        assert_eq!(state.gave_up, 2);
        assert_eq!(state.outcomes, vec![LineOutcome::GaveUp, LineOutcome::GaveUp]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let reader: &[u8] = b"\xff\xfe\n";

        let err = download_list(&downloader(), reader, dir.path(), 1)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Scan(_)));
    }
}
