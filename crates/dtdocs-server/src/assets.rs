//! Request path to response resolution.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::mime::{TEXT_HTML, content_type_for};
use crate::source::{AssetSource, FsSource};

/// Path answered without touching the source.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Default document served for `/` and for unknown paths.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Cache policy for every successful response with a body.
pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Body of the 404 page, used only when the default document is unreadable.
pub const NOT_FOUND_BODY: &str = "<h1>404 - Page Not Found</h1>";

const FAVICON_TYPE: &str = "image/x-icon";

/// How a request was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Served {
    /// The requested file, as stored.
    Asset {
        content_type: &'static str,
        body: Bytes,
    },
    /// Empty favicon reply.
    Favicon,
    /// The requested file is absent; the default document is served instead.
    Fallback { body: Bytes },
    /// Neither the file nor the default document could be read.
    NotFound,
    /// The read failed for a reason other than absence.
    Error { code: String },
}

impl Served {
    pub fn status(&self) -> StatusCode {
        match self {
            Served::Asset { .. } | Served::Fallback { .. } => StatusCode::OK,
            Served::Favicon => StatusCode::NO_CONTENT,
            Served::NotFound => StatusCode::NOT_FOUND,
            Served::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Served::Asset { content_type, .. } => Some(*content_type),
            Served::Favicon => Some(FAVICON_TYPE),
            Served::Fallback { .. } | Served::NotFound => Some(TEXT_HTML),
            Served::Error { .. } => None,
        }
    }

    pub fn body(&self) -> Bytes {
        match self {
            Served::Asset { body, .. } | Served::Fallback { body } => body.clone(),
            Served::Favicon => Bytes::new(),
            Served::NotFound => Bytes::from_static(NOT_FOUND_BODY.as_bytes()),
            Served::Error { code } => Bytes::from(format!("Server Error: {code}")),
        }
    }
}

impl IntoResponse for Served {
    fn into_response(self) -> Response {
        let status = self.status();
        let content_type = self.content_type();
        let cache = matches!(self, Served::Asset { .. } | Served::Fallback { .. });

        let mut response = (status, self.body()).into_response();
        let headers = response.headers_mut();

        // Bytes bodies default to octet-stream; the 500 reply carries no type.
        headers.remove(header::CONTENT_TYPE);
        if let Some(content_type) = content_type {
            headers.insert(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static(content_type),
            );
        }
        if cache {
            headers.insert(
                header::CACHE_CONTROL,
                header::HeaderValue::from_static(NO_CACHE),
            );
        }

        response
    }
}

/// Errno-style name for an I/O error, as shown in 500 bodies.
///
/// OS errors are named from their raw errno; errors built from a bare
/// [`io::ErrorKind`] are named from the kind.
pub fn error_code(err: &io::Error) -> String {
    if let Some(errno) = err.raw_os_error() {
        return errno_name(errno).map_or_else(|| format!("errno {errno}"), str::to_string);
    }

    let name = match err.kind() {
        io::ErrorKind::NotFound => "ENOENT",
        io::ErrorKind::PermissionDenied => "EACCES",
        io::ErrorKind::IsADirectory => "EISDIR",
        io::ErrorKind::NotADirectory => "ENOTDIR",
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidFilename => "EINVAL",
        io::ErrorKind::ResourceBusy => "EBUSY",
        io::ErrorKind::Interrupted => "EINTR",
        io::ErrorKind::OutOfMemory => "ENOMEM",
        io::ErrorKind::StorageFull => "ENOSPC",
        io::ErrorKind::ReadOnlyFilesystem => "EROFS",
        _ => "EIO",
    };
    name.to_string()
}

#[cfg(unix)]
fn errno_name(errno: i32) -> Option<&'static str> {
    let name = match errno {
        libc::EPERM => "EPERM",
        libc::ENOENT => "ENOENT",
        libc::ESRCH => "ESRCH",
        libc::EINTR => "EINTR",
        libc::EIO => "EIO",
        libc::ENXIO => "ENXIO",
        libc::E2BIG => "E2BIG",
        libc::ENOEXEC => "ENOEXEC",
        libc::EBADF => "EBADF",
        libc::ECHILD => "ECHILD",
        libc::EAGAIN => "EAGAIN",
        libc::ENOMEM => "ENOMEM",
        libc::EACCES => "EACCES",
        libc::EFAULT => "EFAULT",
        libc::ENOTBLK => "ENOTBLK",
        libc::EBUSY => "EBUSY",
        libc::EEXIST => "EEXIST",
        libc::EXDEV => "EXDEV",
        libc::ENODEV => "ENODEV",
        libc::ENOTDIR => "ENOTDIR",
        libc::EISDIR => "EISDIR",
        libc::EINVAL => "EINVAL",
        libc::ENFILE => "ENFILE",
        libc::EMFILE => "EMFILE",
        libc::ENOTTY => "ENOTTY",
        libc::ETXTBSY => "ETXTBSY",
        libc::EFBIG => "EFBIG",
        libc::ENOSPC => "ENOSPC",
        libc::ESPIPE => "ESPIPE",
        libc::EROFS => "EROFS",
        libc::EMLINK => "EMLINK",
        libc::EPIPE => "EPIPE",
        libc::EDOM => "EDOM",
        libc::ERANGE => "ERANGE",
        libc::EDEADLK => "EDEADLK",
        libc::ENAMETOOLONG => "ENAMETOOLONG",
        libc::ENOLCK => "ENOLCK",
        libc::ENOSYS => "ENOSYS",
        libc::ENOTEMPTY => "ENOTEMPTY",
        libc::ELOOP => "ELOOP",
        libc::ENOMSG => "ENOMSG",
        libc::EIDRM => "EIDRM",
        libc::EOVERFLOW => "EOVERFLOW",
        libc::EILSEQ => "EILSEQ",
        libc::EOPNOTSUPP => "EOPNOTSUPP",
        libc::ETIMEDOUT => "ETIMEDOUT",
        libc::ECONNREFUSED => "ECONNREFUSED",
        libc::ECONNRESET => "ECONNRESET",
        libc::ESTALE => "ESTALE",
        libc::EDQUOT => "EDQUOT",
        _ => return None,
    };
    Some(name)
}

#[cfg(not(unix))]
fn errno_name(_errno: i32) -> Option<&'static str> {
    None
}

/// Errors that mean "this file is not there" and trigger the fallback.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Maps request paths to files with single-page fallback.
///
/// Cheap to clone; every clone shares one source.
#[derive(Clone)]
pub struct AssetServer {
    source: Arc<dyn AssetSource>,
    default_document: PathBuf,
}

impl fmt::Debug for AssetServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetServer")
            .field("default_document", &self.default_document)
            .finish_non_exhaustive()
    }
}

impl AssetServer {
    pub fn new(source: impl AssetSource) -> Self {
        Self {
            source: Arc::new(source),
            default_document: PathBuf::from(DEFAULT_DOCUMENT),
        }
    }

    /// Serves files from `root` on disk.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self::new(FsSource::new(root))
    }

    /// Replaces the document served for `/` and unknown paths.
    pub fn with_default_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.default_document = document.into();
        self
    }

    pub fn default_document(&self) -> &Path {
        &self.default_document
    }

    /// Answers one request path.
    ///
    /// Never fails: every read error is turned into a [`Served`] value.
    pub async fn handle(&self, request_path: &str) -> Served {
        if request_path == FAVICON_PATH {
            return Served::Favicon;
        }

        let Some(relative) = self.resolve(request_path) else {
            debug!(path = %request_path, "rejected path, serving default document");
            return self.fallback().await;
        };

        match self.source.read(&relative).await {
            Ok(body) => Served::Asset {
                content_type: content_type_for(&relative),
                body,
            },
            Err(err) if is_absent(&err) => {
                debug!(path = %request_path, "not found, serving default document");
                self.fallback().await
            }
            Err(err) => {
                let code = error_code(&err);
                warn!(path = %request_path, code = %code, error = %err, "asset read failed");
                Served::Error { code }
            }
        }
    }

    async fn fallback(&self) -> Served {
        match self.source.read(&self.default_document).await {
            Ok(body) => Served::Fallback { body },
            Err(err) => {
                warn!(
                    document = %self.default_document.display(),
                    error = %err,
                    "default document unreadable"
                );
                Served::NotFound
            }
        }
    }

    /// Turns a request path into a site-relative file path.
    ///
    /// The query string is dropped and `/` maps to the default document.
    /// Returns `None` for paths that would leave the site root.
    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let path = request_path
            .split_once('?')
            .map_or(request_path, |(path, _)| path);
        let trimmed = path.trim_start_matches('/');

        if trimmed.is_empty() {
            return Some(self.default_document.clone());
        }
        if trimmed.contains(['\0', '\\']) {
            return None;
        }

        let mut relative = PathBuf::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        if relative.as_os_str().is_empty() {
            return Some(self.default_document.clone());
        }
        Some(relative)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><title>DTEmpire</title>";

    /// In-memory source. Paths listed in `failures` fail with that error kind.
    #[derive(Default)]
    struct MemorySource {
        files: HashMap<PathBuf, Bytes>,
        failures: HashMap<PathBuf, io::ErrorKind>,
        reads: AtomicUsize,
    }

    impl MemorySource {
        fn with_file(mut self, path: &str, body: &str) -> Self {
            self.files
                .insert(PathBuf::from(path), Bytes::from(body.to_string()));
            self
        }

        fn with_failure(mut self, path: &str, kind: io::ErrorKind) -> Self {
            self.failures.insert(PathBuf::from(path), kind);
            self
        }
    }

    #[async_trait]
    impl AssetSource for MemorySource {
        async fn read(&self, path: &Path) -> io::Result<Bytes> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if let Some(kind) = self.failures.get(path) {
                return Err(io::Error::from(*kind));
            }
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn site() -> MemorySource {
        MemorySource::default()
            .with_file("index.html", INDEX)
            .with_file("styles.css", "body { color: #00ff41; }")
    }

    #[tokio::test]
    async fn serves_existing_files_with_their_type() {
        let server = AssetServer::new(site());

        let served = server.handle("/styles.css").await;
        assert_eq!(served.status(), StatusCode::OK);
        assert_eq!(served.content_type(), Some("text/css"));
        assert_eq!(&served.body()[..], b"body { color: #00ff41; }");
    }

    #[tokio::test]
    async fn root_serves_the_default_document() {
        let server = AssetServer::new(site());

        let served = server.handle("/").await;
        assert_eq!(
            served,
            Served::Asset {
                content_type: "text/html",
                body: Bytes::from_static(INDEX.as_bytes()),
            }
        );
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_default_document() {
        let server = AssetServer::new(site());

        let served = server.handle("/lavalink").await;
        assert_eq!(
            served,
            Served::Fallback {
                body: Bytes::from_static(INDEX.as_bytes()),
            }
        );
        assert_eq!(served.content_type(), Some("text/html"));
    }

    #[tokio::test]
    async fn missing_default_document_is_a_404() {
        let server = AssetServer::new(MemorySource::default());

        let served = server.handle("/anything").await;
        assert_eq!(served, Served::NotFound);
        assert_eq!(served.status(), StatusCode::NOT_FOUND);
        assert_eq!(&served.body()[..], NOT_FOUND_BODY.as_bytes());
    }

    #[tokio::test]
    async fn favicon_never_reads_the_source() {
        let source = site().with_file("favicon.ico", "icon-bytes");
        let server = AssetServer::new(source);

        let served = server.handle("/favicon.ico").await;
        assert_eq!(served, Served::Favicon);
        assert_eq!(served.status(), StatusCode::NO_CONTENT);
        assert_eq!(served.content_type(), Some("image/x-icon"));
        assert!(served.body().is_empty());
    }

    #[tokio::test]
    async fn read_errors_become_500_with_the_code() {
        let source = site().with_failure("secret.json", io::ErrorKind::PermissionDenied);
        let server = AssetServer::new(source);

        let served = server.handle("/secret.json").await;
        assert_eq!(
            served,
            Served::Error {
                code: "EACCES".to_string()
            }
        );
        assert_eq!(&served.body()[..], b"Server Error: EACCES");

        let next = server.handle("/styles.css").await;
        assert_eq!(next.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn not_a_directory_counts_as_absent() {
        let source = site().with_failure("styles.css/x", io::ErrorKind::NotADirectory);
        let server = AssetServer::new(source);

        let served = server.handle("/styles.css/x").await;
        assert!(matches!(served, Served::Fallback { .. }));
    }

    #[tokio::test]
    async fn parent_segments_never_reach_the_source() {
        let server = AssetServer::new(site().with_file("../secret", "nope"));

        let served = server.handle("/../secret").await;
        assert!(matches!(served, Served::Fallback { .. }));

        let served = server.handle("/css/../../secret").await;
        assert!(matches!(served, Served::Fallback { .. }));
    }

    #[tokio::test]
    async fn query_strings_are_ignored() {
        let server = AssetServer::new(site());

        let served = server.handle("/styles.css?v=1.6.9").await;
        assert_eq!(served.content_type(), Some("text/css"));

        let served = server.handle("/?page=home").await;
        assert_eq!(served.content_type(), Some("text/html"));
        assert_eq!(served.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn custom_default_document() {
        let source = MemorySource::default().with_file("app.html", "<main></main>");
        let server = AssetServer::new(source).with_default_document("app.html");

        let served = server.handle("/deep/link").await;
        assert_eq!(&served.body()[..], b"<main></main>");
    }

    #[tokio::test]
    async fn directories_are_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();

        let server = AssetServer::from_root(dir.path());
        let served = server.handle("/assets").await;
        assert_eq!(
            served,
            Served::Error {
                code: "EISDIR".to_string()
            }
        );
    }

    #[tokio::test]
    async fn serves_bytes_from_disk_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
        std::fs::write(dir.path().join("logo.png"), png).unwrap();

        let server = AssetServer::from_root(dir.path());
        let served = server.handle("/logo.png").await;
        assert_eq!(served.content_type(), Some("image/png"));
        assert_eq!(&served.body()[..], &png[..]);
    }

    #[test]
    fn error_codes() {
        let code = |kind| error_code(&io::Error::from(kind));
        assert_eq!(code(io::ErrorKind::PermissionDenied), "EACCES");
        assert_eq!(code(io::ErrorKind::IsADirectory), "EISDIR");
        assert_eq!(code(io::ErrorKind::NotFound), "ENOENT");
        assert_eq!(code(io::ErrorKind::Other), "EIO");
        assert_eq!(error_code(&io::Error::from_raw_os_error(13)), "EACCES");
    }

    #[cfg(unix)]
    #[test]
    fn os_errors_use_their_errno_name() {
        let code = |errno| error_code(&io::Error::from_raw_os_error(errno));
        assert_eq!(code(libc::ELOOP), "ELOOP");
        assert_eq!(code(libc::EMFILE), "EMFILE");
        assert_eq!(code(libc::ENAMETOOLONG), "ENAMETOOLONG");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlink_loops_are_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::os::unix::fs::symlink("loop.css", dir.path().join("loop.css")).unwrap();

        let server = AssetServer::from_root(dir.path());
        let served = server.handle("/loop.css").await;
        assert_eq!(served.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(&served.body()[..], b"Server Error: ELOOP");
    }

    #[test]
    fn response_headers() {
        let response = Served::Asset {
            content_type: "text/css",
            body: Bytes::from_static(b"a{}"),
        }
        .into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_CACHE);

        let response = Served::Fallback {
            body: Bytes::from_static(b"<html>"),
        }
        .into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_CACHE);

        let response = Served::Error {
            code: "EACCES".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
