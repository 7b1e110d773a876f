//! Transient URL list written before downloading.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncSeekExt, AsyncWriteExt, BufReader};

use crate::error::{Error, Result};

/// Name of the staging file inside the target directory.
pub const STAGING_FILE_NAME: &str = "output.txt";

/// URL list staged in the target directory, one URL per line.
///
/// The file is removed when the value is dropped.
#[derive(Debug)]
pub struct StagingFile {
    path: PathBuf,
    file: File,
}

impl StagingFile {
    /// Create (or truncate) the staging file in `dir`.
    pub async fn create(dir: &Path) -> Result<Self> {
        let path = dir.join(STAGING_FILE_NAME);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await
            .map_err(|e| Error::Staging(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Staging file: {}", path.display());
        Ok(Self { path, file })
    }

    /// Path of the staging file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one URL per line, then rewind for reading.
    pub async fn write_urls(&mut self, urls: &[String]) -> Result<()> {
        for url in urls {
            self.file.write_all(url.as_bytes()).await?;
            self.file.write_all(b"\n").await?;
        }
        self.file.flush().await?;
        self.file.seek(SeekFrom::Start(0)).await?;
        Ok(())
    }

    /// Buffered reader over the staged lines.
    pub fn reader(&mut self) -> BufReader<&mut File> {
        BufReader::new(&mut self.file)
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::debug!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_urls_read_back_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let urls = vec![
            "https://img.example.com/a.jpg".to_string(),
            "https://img.example.com/b.jpg?w=1&h=2".to_string(),
            "https://img.example.com/a.jpg".to_string(),
        ];

        let mut staging = StagingFile::create(dir.path()).await.unwrap();
        staging.write_urls(&urls).await.unwrap();

        let mut lines = staging.reader().lines();
        let mut read = Vec::new();
        while let Some(line) = lines.next_line().await.unwrap() {
            read.push(line);
        }

        assert_eq!(read, urls);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let dir = tempfile::tempdir().unwrap();

        let mut staging = StagingFile::create(dir.path()).await.unwrap();
        staging.write_urls(&[]).await.unwrap();

        let mut lines = staging.reader().lines();
        assert!(lines.next_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();

        let staging = StagingFile::create(dir.path()).await.unwrap();
        let path = staging.path().to_path_buf();
        assert!(path.exists());

        drop(staging);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_dir_is_staging_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StagingFile::create(&dir.path().join("absent"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Staging(_)));
    }
}
