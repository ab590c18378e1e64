//! DTEmpire documentation CLI.
//!
//! Builds the single-page documentation site and serves it.
//!
//! # Quick Start
//!
//! ```bash
//! # Pre-render the site into ./site
//! dtdocs build
//!
//! # Serve it on 0.0.0.0:25587
//! dtdocs serve
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// DTEmpire documentation server and site builder.
#[derive(Parser)]
#[command(name = "dtdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding dtdocs.toml (defaults to the current directory).
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Serve the site with single-page fallback.
    Serve {
        /// Port to listen on (overrides SERVER_PORT and config files).
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve files from.
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Print the full page for one documentation page.
    Render {
        /// Page slug (e.g. lavalink, music-bot).
        page: String,

        /// Theme to render with (dark or light).
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Pre-render every page into a directory.
    Build {
        /// Output directory (defaults to server.root).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the documentation pages.
    Pages,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    let project_dir = cli.project_dir.as_deref();
    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Serve { port, root } => commands::serve::run(project_dir, port, root),
        Commands::Render { page, theme } => {
            commands::render::run(project_dir, &page, theme.as_deref())
        }
        Commands::Build { out } => commands::build::run(project_dir, out),
        Commands::Pages => {
            commands::pages::run();
            Ok(())
        }
    }
}
