//! Output directory management.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::DirBuilder;

use crate::error::{Error, Result};
use crate::fs::naming::is_usable_dir_name;
use crate::output::print_warning;

/// Permission bits for created directories (before umask).
#[cfg(unix)]
const DIR_MODE: u32 = 0o777;

/// Get the per-page directory path for a sanitized title.
pub fn get_page_folder(cwd: &Path, store_dir: &Path, title: &str) -> PathBuf {
    cwd.join(store_dir).join(title)
}

/// Create the directory images of this page are saved to.
///
/// Tries `<cwd>/<store_dir>/<title>` first. If that cannot be created
/// (it already exists, the store root is missing, the name is rejected by
/// the filesystem) the store root itself is used instead, creating it if
/// needed. Only a failure to provide the store root is fatal.
pub async fn prepare_target_dir(cwd: &Path, store_dir: &Path, title: &str) -> Result<PathBuf> {
    let store_root = cwd.join(store_dir);

    if is_usable_dir_name(title) {
        let page_dir = get_page_folder(cwd, store_dir, title);
        match create_dir(&page_dir, false).await {
            Ok(()) => {
                tracing::debug!("Created {}", page_dir.display());
                return Ok(page_dir);
            }
            Err(e) => {
                print_warning(&format!("mkdir {}: {}", page_dir.display(), e));
            }
        }
    } else {
        print_warning("Page has no usable title, saving into the store root");
    }

    create_dir(&store_root, true)
        .await
        .map_err(|e| Error::Directory(format!("{}: {}", store_root.display(), e)))?;

    Ok(store_root)
}

async fn create_dir(path: &Path, recursive: bool) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder.create(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_page_folder() {
        let path = get_page_folder(Path::new("/work"), Path::new("images"), "My Gallery");
        assert_eq!(path, PathBuf::from("/work/images/My Gallery"));
    }

    #[tokio::test]
    async fn test_creates_page_dir() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir(cwd.path().join("images")).unwrap();

        let dir = prepare_target_dir(cwd.path(), Path::new("images"), "My Gallery")
            .await
            .unwrap();

        assert_eq!(dir, cwd.path().join("images").join("My Gallery"));
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_existing_dir_falls_back_to_store_root() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(cwd.path().join("images").join("My Gallery")).unwrap();

        let dir = prepare_target_dir(cwd.path(), Path::new("images"), "My Gallery")
            .await
            .unwrap();

        assert_eq!(dir, cwd.path().join("images"));
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir(cwd.path().join("images")).unwrap();

        let first = prepare_target_dir(cwd.path(), Path::new("images"), "Gallery")
            .await
            .unwrap();
        let second = prepare_target_dir(cwd.path(), Path::new("images"), "Gallery")
            .await
            .unwrap();

        assert_eq!(first, cwd.path().join("images").join("Gallery"));
        assert_eq!(second, cwd.path().join("images"));
    }

    #[tokio::test]
    async fn test_missing_store_root_is_created() {
        let cwd = tempfile::tempdir().unwrap();

        let dir = prepare_target_dir(cwd.path(), Path::new("images"), "Gallery")
            .await
            .unwrap();

        assert_eq!(dir, cwd.path().join("images"));
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_empty_title_uses_store_root() {
        let cwd = tempfile::tempdir().unwrap();

        let dir = prepare_target_dir(cwd.path(), Path::new("images"), "")
            .await
            .unwrap();

        assert_eq!(dir, cwd.path().join("images"));
    }

    #[tokio::test]
    async fn test_fallback_failure_is_fatal() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("images"), b"not a directory").unwrap();

        let err = prepare_target_dir(cwd.path(), Path::new("images"), "Gallery")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Directory(_)));
    }
}
