//! HTTP routing.

use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{AssetServer, Served};

/// Builds the service. Every method and path goes through
/// [`AssetServer::handle`].
pub fn router(server: AssetServer) -> Router {
    Router::new()
        .fallback(serve_asset)
        .with_state(server)
        .layer(TraceLayer::new_for_http())
}

async fn serve_asset(State(server): State<AssetServer>, method: Method, uri: Uri) -> Served {
    info!(%method, %uri, "request");
    server.handle(uri.path()).await
}
