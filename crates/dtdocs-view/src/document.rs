//! DOM-like document model.
//!
//! Only what the router touches is modelled: elements addressable by id,
//! their class lists, text and inner HTML, and click listeners. Navigation
//! entries are tracked as an ordered group, standing in for the sidebar's
//! `.nav-section a` query.

use std::collections::{BTreeMap, BTreeSet};

use crate::{NavSection, PageId, Route};

/// Id of the content region the router mounts on.
pub const CONTENT_REGION_ID: &str = "content-body";

/// Id of the breadcrumb label.
pub const BREADCRUMB_ID: &str = "breadcrumb";

/// Id of the console output panel.
pub const TERMINAL_OUTPUT_ID: &str = "terminal-output";

/// Click listener attached by [`crate::ViewRouter::wire_navigation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    /// Route navigated to on click.
    pub route: Route,
    /// Suppress the element's default action (following its `href`).
    pub prevent_default: bool,
}

/// A single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: BTreeSet<String>,
    text: String,
    inner_html: String,
    href: Option<String>,
    listener: Option<Listener>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Space-separated class list, as it appears in a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replaces the element's entire contents.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    pub fn append_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn listener(&self) -> Option<&Listener> {
        self.listener.as_ref()
    }

    pub(crate) fn set_listener(&mut self, listener: Listener) {
        self.listener = Some(listener);
    }
}

/// Element registry keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    body: Element,
    elements: BTreeMap<String, Element>,
    nav: Vec<String>,
}

impl Document {
    /// An empty document with no elements.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Element::new("body"),
            elements: BTreeMap::new(),
            nav: Vec::new(),
        }
    }

    /// The site shell: content region, breadcrumb, console output and one
    /// navigation entry per page.
    pub fn shell(title: impl Into<String>) -> Self {
        let mut doc = Self::new(title);

        doc.insert(
            CONTENT_REGION_ID,
            Element::new("div").with_class("content-body"),
        );
        doc.insert(BREADCRUMB_ID, Element::new("span").with_class("breadcrumb"));
        doc.insert(
            TERMINAL_OUTPUT_ID,
            Element::new("div").with_class("terminal-output"),
        );

        for section in NavSection::ALL {
            for page in section.pages() {
                doc.insert_nav_entry(
                    page.nav_id(),
                    Element::new("a")
                        .with_class("nav-link")
                        .with_text(page.title())
                        .with_href(page.href()),
                );
            }
        }

        doc
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Inserts or replaces an element.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    /// Inserts an element and registers it as a navigation entry.
    pub fn insert_nav_entry(&mut self, id: impl Into<String>, element: Element) {
        let id = id.into();
        if !self.nav.contains(&id) {
            self.nav.push(id.clone());
        }
        self.elements.insert(id, element);
    }

    /// Removes an element. Navigation entries leave the nav group too.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.nav.retain(|nav_id| nav_id != id);
        self.elements.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Navigation entries in sidebar order.
    pub fn nav_entries(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.nav
            .iter()
            .filter_map(|id| self.elements.get(id).map(|el| (id.as_str(), el)))
    }

    /// Ids of navigation entries currently marked active.
    pub fn active_nav_ids(&self) -> Vec<&str> {
        self.nav_entries()
            .filter(|(_, el)| el.has_class("active"))
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn nav_ids(&self) -> Vec<String> {
        self.nav.clone()
    }

    /// Navigation entry for a page, if the document has one.
    pub fn nav_entry(&self, page: PageId) -> Option<&Element> {
        self.get(&page.nav_id())
    }
}
