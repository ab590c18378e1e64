//! Configuration loader with multi-source merging

use crate::{ConfigError, DocsConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of the layered environment variables (`DTDOCS_SERVER__PORT`).
const ENV_PREFIX: &str = "DTDOCS";

/// Port variable honoured on top of the prefixed environment.
pub const LEGACY_PORT_VAR: &str = "SERVER_PORT";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    user_config: bool,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_config: true,
            env: None,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Skip ~/.config/dtdocs/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Read variables from `vars` instead of the process environment
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.into(), value.into());
        }
        self.env = Some(map);
        self
    }

    fn var(&self, name: &str) -> Option<String> {
        match &self.env {
            Some(map) => map.get(name).cloned(),
            None => env::var(name).ok(),
        }
    }

    fn add_file(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: PathBuf,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        if !path.exists() {
            return Ok(builder);
        }

        DocsConfig::check_file(&path)?;
        debug!(path = %path.display(), "loading config file");
        Ok(builder.add_source(
            config::File::from(path)
                .required(false)
                .format(config::FileFormat::Toml),
        ))
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<DocsConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = DocsConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/dtdocs/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                builder = Self::add_file(builder, user_config_file)?;
            }
        }

        // 3. Project config (dtdocs.toml)
        builder = Self::add_file(builder, Paths::project_config_file(&self.project_dir))?;

        // 4. Local config (dtdocs.local.toml, gitignored)
        builder = Self::add_file(builder, Paths::local_config_file(&self.project_dir))?;

        // 5. Environment variables (DTDOCS_SERVER__PORT, ...)
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(self.env.clone()),
        );

        // 6. SERVER_PORT
        if let Some(raw) = self.var(LEGACY_PORT_VAR) {
            let port: u16 = raw.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{LEGACY_PORT_VAR} must be a port number (0-65535), got '{raw}'"
                ))
            })?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let mut docs_config: DocsConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        docs_config.validate()?;
        docs_config.resolve_paths(&self.project_dir);

        Ok(docs_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
