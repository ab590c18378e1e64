//! Full-page serialisation of a [`Document`].

use askama::Template;

use crate::state::CssVar;
use crate::{
    BREADCRUMB_ID, Document, NavSection, PageId, PROMPT, TERMINAL_OUTPUT_ID,
    Theme, ViewResult, ViewState,
};

struct NavLink {
    id: String,
    classes: String,
    href: String,
    text: String,
}

struct SidebarSection {
    label: &'static str,
    entries: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    title: &'a str,
    theme: Theme,
    body_class: Option<String>,
    palette: &'static [CssVar],
    sections: Vec<SidebarSection>,
    breadcrumb: &'a str,
    content: &'a str,
    terminal: &'a str,
    prompt: &'static str,
}

/// Renders the document as a complete HTML page, taking the page content
/// from the element with `content_id`.
///
/// Navigation entries are grouped under their sidebar section. Entries that
/// do not belong to a known page are listed in a trailing "More" section.
pub(crate) fn render(
    document: &Document,
    content_id: &str,
    state: &ViewState,
) -> ViewResult<String> {
    let mut sections: Vec<SidebarSection> = NavSection::ALL
        .iter()
        .map(|section| SidebarSection {
            label: section.label(),
            entries: Vec::new(),
        })
        .collect();
    let mut extra = Vec::new();

    for (id, element) in document.nav_entries() {
        let link = NavLink {
            id: id.to_string(),
            classes: element.class_attr(),
            href: element.href().unwrap_or("#").to_string(),
            text: element.text().to_string(),
        };

        match id.parse::<PageId>() {
            Ok(page) => {
                let slot = NavSection::ALL
                    .iter()
                    .position(|s| *s == page.section())
                    .unwrap_or_default();
                sections[slot].entries.push(link);
            }
            Err(_) => extra.push(link),
        }
    }

    sections.retain(|s| !s.entries.is_empty());
    if !extra.is_empty() {
        sections.push(SidebarSection {
            label: "More",
            entries: extra,
        });
    }

    let body_classes = document.body().class_attr();
    let text_of = |id: &str| document.get(id).map_or("", |el| el.text());
    let html_of = |id: &str| document.get(id).map_or("", |el| el.inner_html());

    let template = ShellTemplate {
        title: document.title(),
        theme: state.theme(),
        body_class: (!body_classes.is_empty()).then_some(body_classes),
        palette: state.theme().palette(),
        sections,
        breadcrumb: text_of(BREADCRUMB_ID),
        content: html_of(content_id),
        terminal: html_of(TERMINAL_OUTPUT_ID),
        prompt: PROMPT,
    };

    Ok(template.render()?)
}
