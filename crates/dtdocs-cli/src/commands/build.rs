//! Build command - pre-renders every page into a directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dtdocs_view::{PageId, Theme};
use tracing::debug;

use super::render::render_page;
use crate::style::{print_hint, print_success};

/// Stylesheet shipped with every build.
const STYLESHEET: &str = include_str!("../../assets/styles.css");

pub fn run(project_dir: Option<&Path>, out: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(project_dir)?;
    let out = out.unwrap_or_else(|| config.server.root.clone());
    let theme: Theme = config.site.theme.parse()?;

    let written = build_site(
        &out,
        &config.site.title,
        &config.server.default_document,
        theme,
    )?;

    print_success(&format!("Wrote {} files to {}", written.len(), out.display()));
    print_hint("Run `dtdocs serve` to preview the site");
    Ok(())
}

/// Output file for a page. The home page is the default document.
fn file_name(page: PageId, default_document: &str) -> String {
    match page {
        PageId::Home => default_document.to_string(),
        other => format!("{}.html", other.slug()),
    }
}

/// Writes one HTML file per page plus the stylesheet.
pub fn build_site(
    out: &Path,
    title: &str,
    default_document: &str,
    theme: Theme,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    let mut written = Vec::new();
    for page in PageId::ALL {
        let path = out.join(file_name(page, default_document));
        let html = render_page(title, page, theme)?;
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(page = %page, path = %path.display(), "page written");
        written.push(path);
    }

    let css = out.join("styles.css");
    fs::write(&css, STYLESHEET).with_context(|| format!("Failed to write {}", css.display()))?;
    written.push(css);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_becomes_the_default_document() {
        assert_eq!(file_name(PageId::Home, "index.html"), "index.html");
        assert_eq!(file_name(PageId::MusicBot, "index.html"), "music-bot.html");
    }

    #[test]
    fn builds_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let written = build_site(dir.path(), "Docs", "index.html", Theme::Dark).unwrap();
        assert_eq!(written.len(), PageId::ALL.len() + 1);

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("Home / Introduction"));
        assert!(index.contains("id=\"nav-home\" class=\"active nav-active nav-link\""));

        let lavalink = fs::read_to_string(dir.path().join("lavalink.html")).unwrap();
        assert!(lavalink.contains("Documentation / Lavalink v4"));

        assert!(dir.path().join("styles.css").exists());
    }
}
