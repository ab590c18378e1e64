//! Configuration management for the DTEmpire documentation server
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. `SERVER_PORT` (port only, kept for hosting panels that set it)
//! 3. Environment variables (`DTDOCS_*` prefix, `__` between levels)
//! 4. dtdocs.local.toml (gitignored, local overrides)
//! 5. dtdocs.toml (git-tracked, project config)
//! 6. ~/.config/dtdocs/config.toml (user defaults)
//! 7. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::{ConfigLoader, LEGACY_PORT_VAR};
pub use paths::Paths;

/// Port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 25587;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory the static files are served from.
    pub root: PathBuf,
    /// Served for `/` and for paths that do not name a file.
    pub default_document: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("site"),
            default_document: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title of the rendered shell.
    pub title: String,
    /// Initial theme, `dark` or `light`.
    pub theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "DTEmpire Documentation".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parses one TOML file on its own, so syntax errors name the file.
    pub fn check_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rejects values the server cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let document = Path::new(&self.server.default_document);
        if self.server.default_document.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.default_document must not be empty".to_string(),
            ));
        }
        if document.is_absolute() || self.server.default_document.contains("..") {
            return Err(ConfigError::ValidationError(format!(
                "server.default_document must be relative to server.root, got '{}'",
                self.server.default_document
            )));
        }
        if !matches!(self.site.theme.to_lowercase().as_str(), "dark" | "light") {
            return Err(ConfigError::ValidationError(format!(
                "site.theme must be 'dark' or 'light', got '{}'",
                self.site.theme
            )));
        }
        Ok(())
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        if self.server.root.is_relative() {
            self.server.root = base_dir.as_ref().join(&self.server.root);
        }
    }
}
