//! Render command - prints one page as a complete HTML document.

use std::path::Path;

use anyhow::{Context, Result};
use dtdocs_view::{Document, PageId, Theme, ViewRouter};

pub fn run(project_dir: Option<&Path>, page: &str, theme: Option<&str>) -> Result<()> {
    let config = super::load_config(project_dir)?;
    let page: PageId = page.parse()?;
    let theme: Theme = theme.unwrap_or(&config.site.theme).parse()?;

    let html = render_page(&config.site.title, page, theme)
        .with_context(|| format!("Failed to render page '{page}'"))?;
    print!("{html}");
    Ok(())
}

/// Renders `page` inside the site shell with `page` marked active.
pub fn render_page(title: &str, page: PageId, theme: Theme) -> Result<String> {
    let mut router = ViewRouter::new(Document::shell(title))?;
    router.set_theme(theme)?;
    router.navigate(page)?;
    Ok(router.render_shell()?)
}
