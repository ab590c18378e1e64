//! The view router.

use tracing::{debug, trace};

use crate::console::{self, ConsoleEffect, ConsoleReply, PROMPT};
use crate::pages::{self, Rendered};
use crate::{
    BREADCRUMB_ID, Breadcrumb, CONTENT_REGION_ID, Document, Listener, PageId, Route,
    TERMINAL_OUTPUT_ID, Theme, ViewError, ViewResult, ViewState, shell,
};

/// Classes that mark a navigation entry as the current page.
const ACTIVE_CLASSES: [&str; 2] = ["active", "nav-active"];

/// Class on `<body>` while the light theme is active.
const LIGHT_THEME_CLASS: &str = "light-theme";

/// What a navigation did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub breadcrumb: Breadcrumb,
    /// Navigation entry now marked active, if the document has one.
    pub active_nav: Option<String>,
    pub placeholder: bool,
}

/// Result of dispatching a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A listener navigated and suppressed the default action.
    Handled(Navigation),
    /// No listener; the element's default action (following its link) runs.
    Default,
}

/// Maps navigation intents to page content inside a [`Document`].
///
/// The router owns the document and its [`ViewState`]. All mutation goes
/// through `&mut self`, so navigations never interleave.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    document: Document,
    mount_id: String,
    state: ViewState,
}

impl ViewRouter {
    /// Mounts on the standard content region.
    pub fn new(document: Document) -> ViewResult<Self> {
        Self::mount(document, CONTENT_REGION_ID)
    }

    /// Mounts on the element with `mount_id`.
    pub fn mount(document: Document, mount_id: impl Into<String>) -> ViewResult<Self> {
        let mount_id = mount_id.into();
        if !document.contains(&mount_id) {
            return Err(ViewError::MissingMountPoint { id: mount_id });
        }

        debug!(mount = %mount_id, "view router mounted");
        Ok(Self {
            document,
            mount_id,
            state: ViewState::default(),
        })
    }

    /// Replaces the initial state. Nothing is re-rendered.
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The page currently displayed.
    pub fn active(&self) -> &Route {
        self.state.active()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Shows the page for `target`.
    ///
    /// Unknown identifiers show the placeholder and still succeed.
    pub fn navigate(&mut self, target: impl Into<Route>) -> ViewResult<Navigation> {
        let route = target.into();
        let rendered = pages::build(&route, &self.state)?;
        let navigation = self.apply(rendered);

        self.state.record_navigation(route);
        debug!(
            page = %navigation.route,
            placeholder = navigation.placeholder,
            navigations = self.state.navigations(),
            "navigated"
        );

        Ok(navigation)
    }

    /// Writes a built page into the document.
    fn apply(&mut self, rendered: Rendered) -> Navigation {
        let active_id = rendered.active_nav();
        let placeholder = rendered.is_placeholder();

        if let Some(region) = self.document.get_mut(&self.mount_id) {
            region.set_inner_html(rendered.content);
        }
        if let Some(label) = self.document.get_mut(BREADCRUMB_ID) {
            label.set_text(rendered.breadcrumb.to_string());
        }

        let mut active_nav = None;
        for id in self.document.nav_ids() {
            let Some(entry) = self.document.get_mut(&id) else {
                continue;
            };
            for class in ACTIVE_CLASSES {
                entry.remove_class(class);
            }
            if id == active_id {
                for class in ACTIVE_CLASSES {
                    entry.add_class(class);
                }
                active_nav = Some(id);
            }
        }

        Navigation {
            route: rendered.route,
            breadcrumb: rendered.breadcrumb,
            active_nav,
            placeholder,
        }
    }

    /// Attaches a navigating click listener to each element id.
    ///
    /// Returns the ids that are not in the document; those are skipped.
    pub fn wire_navigation<I, S, R>(&mut self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<Route>,
    {
        let mut missing = Vec::new();

        for (id, route) in entries {
            let id = id.into();
            match self.document.get_mut(&id) {
                Some(element) => {
                    element.set_listener(Listener {
                        route: route.into(),
                        prevent_default: true,
                    });
                    trace!(element = %id, "navigation listener attached");
                }
                None => missing.push(id),
            }
        }

        if !missing.is_empty() {
            debug!(missing = ?missing, "navigation entries not found in document");
        }
        missing
    }

    /// Wires the standard `nav-<slug>` entry of every page.
    pub fn wire_default_navigation(&mut self) -> Vec<String> {
        self.wire_navigation(PageId::ALL.map(|page| (page.nav_id(), page)))
    }

    /// Dispatches a click on an element.
    pub fn click(&mut self, element_id: &str) -> ViewResult<ClickOutcome> {
        let route = self
            .document
            .get(element_id)
            .and_then(|el| el.listener())
            .map(|listener| listener.route.clone());

        match route {
            Some(route) => Ok(ClickOutcome::Handled(self.navigate(route)?)),
            None => Ok(ClickOutcome::Default),
        }
    }

    /// Runs one console line, echoing it into the output panel.
    ///
    /// `Open` effects are returned to the caller; everything else is applied
    /// here.
    pub fn run_command(&mut self, line: &str) -> ViewResult<ConsoleReply> {
        let reply = console::execute(line);
        if reply.is_empty() {
            return Ok(reply);
        }

        self.append_terminal_line(&format!(
            "<span class=\"term-prompt\">{PROMPT}</span> {}",
            html_escape::encode_text(&reply.command)
        ));

        match reply.effect {
            Some(ConsoleEffect::Clear) => {
                if let Some(output) = self.document.get_mut(TERMINAL_OUTPUT_ID) {
                    output.set_inner_html("");
                }
            }
            Some(ConsoleEffect::ToggleTheme) => {
                self.toggle_theme()?;
            }
            Some(ConsoleEffect::Navigate(page)) => {
                self.navigate(page)?;
            }
            Some(ConsoleEffect::Open(_)) | None => {}
        }

        for line in &reply.lines {
            self.append_terminal_line(&html_escape::encode_text(line));
        }

        Ok(reply)
    }

    fn append_terminal_line(&mut self, html: &str) {
        if let Some(output) = self.document.get_mut(TERMINAL_OUTPUT_ID) {
            output.append_html(&format!("<div class=\"terminal-line\">{html}</div>"));
        }
    }

    /// Flips between dark and light. Returns the new theme.
    pub fn toggle_theme(&mut self) -> ViewResult<Theme> {
        let theme = self.state.theme().toggle();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Switches theme and refreshes the displayed page.
    ///
    /// The refresh is not counted as a navigation.
    pub fn set_theme(&mut self, theme: Theme) -> ViewResult<()> {
        self.state.set_theme(theme);

        let body = self.document.body_mut();
        match theme.body_class() {
            Some(class) => body.add_class(class),
            None => body.remove_class(LIGHT_THEME_CLASS),
        }

        let rendered = pages::build(self.state.active(), &self.state)?;
        self.apply(rendered);
        debug!(theme = %theme, "theme changed");
        Ok(())
    }

    /// Serialises the document as a complete HTML page.
    pub fn render_shell(&self) -> ViewResult<String> {
        shell::render(&self.document, &self.mount_id, &self.state)
    }
}
