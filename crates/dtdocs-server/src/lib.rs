//! Static asset server for the DTEmpire documentation site.
//!
//! Files are served from a site root. Paths that do not name a file get the
//! default document instead, so client-side deep links survive a reload.
//!
//! # Example
//!
//! ```no_run
//! use dtdocs_server::{AssetServer, bind, serve};
//!
//! # async fn run() -> dtdocs_server::ServerResult<()> {
//! let listener = bind(25587).await?;
//! serve(listener, AssetServer::from_root("site")).await
//! # }
//! ```

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

mod assets;
mod error;
pub mod mime;
mod routes;
mod source;

pub use assets::{
    AssetServer, DEFAULT_DOCUMENT, FAVICON_PATH, NO_CACHE, NOT_FOUND_BODY, Served, error_code,
};
pub use error::{ServerError, ServerResult};
pub use routes::router;
pub use source::{AssetSource, FsSource};

/// Binds `port` on every interface.
pub async fn bind(port: u16) -> ServerResult<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves requests on `listener` until the process exits.
pub async fn serve(listener: TcpListener, server: AssetServer) -> ServerResult<()> {
    let addr = listener.local_addr()?;
    info!(%addr, ?server, "documentation server listening");

    axum::serve(listener, router(server))
        .await
        .map_err(ServerError::Serve)
}
