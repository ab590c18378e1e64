//! Where asset bytes come from.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

/// Read-only byte source keyed by site-relative path.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait AssetSource: Send + Sync + 'static {
    /// Reads the whole file at `path`, relative to the site root.
    ///
    /// `path` never contains `..` segments or a leading `/`.
    async fn read(&self, path: &Path) -> io::Result<Bytes>;
}

/// Serves files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for FsSource {
    async fn read(&self, path: &Path) -> io::Result<Bytes> {
        tokio::fs::read(self.root.join(path)).await.map(Bytes::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/site.css"), "body {}").unwrap();

        let source = FsSource::new(dir.path());
        let bytes = source.read(Path::new("css/site.css")).await.unwrap();
        assert_eq!(&bytes[..], b"body {}");
    }

    #[tokio::test]
    async fn missing_files_report_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());

        let err = source.read(Path::new("nope.html")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
