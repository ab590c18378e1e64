//! Command implementations.

pub mod build;
pub mod pages;
pub mod render;
pub mod serve;
pub mod version;

use std::path::Path;

use anyhow::Result;
use dtdocs_config::DocsConfig;

/// Loads configuration from `project_dir`, or the current directory.
fn load_config(project_dir: Option<&Path>) -> Result<DocsConfig> {
    match project_dir {
        Some(dir) => DocsConfig::load_from_dir(dir),
        None => DocsConfig::load(),
    }
}
