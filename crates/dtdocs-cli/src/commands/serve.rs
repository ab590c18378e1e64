//! Serve command - runs the static asset server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dtdocs_server::AssetServer;
use tracing::info;

use crate::style::banner::print_server_banner;
use crate::style::print_warn;

pub fn run(project_dir: Option<&Path>, port: Option<u16>, root: Option<PathBuf>) -> Result<()> {
    let mut config = super::load_config(project_dir)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(root) = root {
        config.server.root = root;
    }

    let default_document = config.server.root.join(&config.server.default_document);
    if !default_document.is_file() {
        print_warn(&format!(
            "{} not found; unknown paths will get a 404. Run `dtdocs build` first.",
            default_document.display()
        ));
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = dtdocs_server::bind(config.server.port)
            .await
            .with_context(|| format!("Failed to listen on port {}", config.server.port))?;
        let addr = listener.local_addr()?;

        let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        print_server_banner(addr, &started);
        info!(root = %config.server.root.display(), "serving documentation site");

        let server = AssetServer::from_root(&config.server.root)
            .with_default_document(&config.server.default_document);
        dtdocs_server::serve(listener, server).await?;
        Ok::<(), anyhow::Error>(())
    })
}
