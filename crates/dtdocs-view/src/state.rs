//! Session-local view state.

use std::fmt;
use std::str::FromStr;

use crate::{Route, ViewError};

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// A CSS custom property applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssVar {
    pub name: &'static str,
    pub value: &'static str,
}

const fn var(name: &'static str, value: &'static str) -> CssVar {
    CssVar { name, value }
}

const DARK_PALETTE: [CssVar; 8] = [
    var("--primary", "#00ff41"),
    var("--primary-dark", "#008f11"),
    var("--secondary", "#003b00"),
    var("--bg-dark", "#0a0a0a"),
    var("--bg-darker", "#050505"),
    var("--text-primary", "#ffffff"),
    var("--text-secondary", "#b0b0b0"),
    var("--text-code", "#00ff9d"),
];

const LIGHT_PALETTE: [CssVar; 8] = [
    var("--primary", "#006400"),
    var("--primary-dark", "#004d00"),
    var("--secondary", "#e0ffe0"),
    var("--bg-dark", "#f0f0f0"),
    var("--bg-darker", "#e0e0e0"),
    var("--text-primary", "#000000"),
    var("--text-secondary", "#333333"),
    var("--text-code", "#008000"),
];

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Class set on `<body>` while this theme is active.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light-theme"),
        }
    }

    pub fn palette(self) -> &'static [CssVar] {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ViewError::UnknownTheme(s.to_string())),
        }
    }
}

/// State owned by one [`crate::ViewRouter`].
///
/// Resets on reload: nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Route,
    theme: Theme,
    navigations: u64,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// The page currently displayed.
    pub fn active(&self) -> &Route {
        &self.active
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Number of navigations applied since the router was mounted.
    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    pub(crate) fn record_navigation(&mut self, route: Route) {
        self.active = route;
        self.navigations += 1;
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageId;

    #[test]
    fn default_state_shows_home_in_dark_theme() {
        let state = ViewState::default();
        assert_eq!(state.active(), &Route::Page(PageId::Home));
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.navigations(), 0);
    }

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn palettes_define_the_same_variables() {
        let dark: Vec<_> = Theme::Dark.palette().iter().map(|v| v.name).collect();
        let light: Vec<_> = Theme::Light.palette().iter().map(|v| v.name).collect();
        assert_eq!(dark, light);
    }

    #[test]
    fn only_light_theme_sets_a_body_class() {
        assert_eq!(Theme::Dark.body_class(), None);
        assert_eq!(Theme::Light.body_class(), Some("light-theme"));
    }

    #[test]
    fn theme_parsing() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
