//! Page identifiers and navigation routes.

use std::fmt;
use std::str::FromStr;

use crate::ViewError;

/// Prefix shared by every navigation entry's element id.
const NAV_ID_PREFIX: &str = "nav-";

/// A documentation page.
///
/// The set is closed: every page the site can render is a variant here, so
/// page dispatch is an exhaustive `match` rather than a runtime table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Home,
    Status,
    Discord,
    Lavalink,
    MusicBot,
    ImageApi,
    GameServers,
    Websites,
    Api,
    DtempireBot,
    Invite,
    Github,
}

impl PageId {
    /// All pages in sidebar order.
    pub const ALL: [PageId; 12] = [
        PageId::Home,
        PageId::Status,
        PageId::Discord,
        PageId::Lavalink,
        PageId::MusicBot,
        PageId::ImageApi,
        PageId::GameServers,
        PageId::Websites,
        PageId::Api,
        PageId::DtempireBot,
        PageId::Invite,
        PageId::Github,
    ];

    /// Stable URL-safe identifier.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Status => "status",
            PageId::Discord => "discord",
            PageId::Lavalink => "lavalink",
            PageId::MusicBot => "music-bot",
            PageId::ImageApi => "image-api",
            PageId::GameServers => "game-servers",
            PageId::Websites => "websites",
            PageId::Api => "api",
            PageId::DtempireBot => "dtempire-bot",
            PageId::Invite => "invite",
            PageId::Github => "github",
        }
    }

    /// Slugs of every page, in sidebar order.
    pub fn slugs() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.slug()).collect()
    }

    /// Sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Introduction",
            PageId::Status => "Status",
            PageId::Discord => "Discord",
            PageId::Lavalink => "Lavalink v4",
            PageId::MusicBot => "Music Bot",
            PageId::ImageApi => "Image Generation API",
            PageId::GameServers => "Game Servers",
            PageId::Websites => "Websites",
            PageId::Api => "API",
            PageId::DtempireBot => "DTEmpire Bot",
            PageId::Invite => "Invite Bot",
            PageId::Github => "GitHub",
        }
    }

    /// Sidebar section the page is listed under.
    pub fn section(self) -> NavSection {
        match self {
            PageId::Home | PageId::Status | PageId::Discord => NavSection::Home,
            PageId::Lavalink
            | PageId::MusicBot
            | PageId::ImageApi
            | PageId::GameServers
            | PageId::Websites
            | PageId::Api
            | PageId::DtempireBot => NavSection::Documentation,
            PageId::Invite | PageId::Github => NavSection::Resources,
        }
    }

    /// Human-readable location shown above the content region.
    pub fn breadcrumb(self) -> Breadcrumb {
        Breadcrumb::new(self.section().label(), self.title())
    }

    /// Element id of the page's navigation entry.
    pub fn nav_id(self) -> String {
        format!("{NAV_ID_PREFIX}{}", self.slug())
    }

    /// Link target used by the pre-rendered site.
    pub fn href(self) -> String {
        match self {
            PageId::Home => "/".to_string(),
            other => format!("/{}.html", other.slug()),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = ViewError;

    /// Parses a slug, case-insensitively. The element-id form
    /// (`nav-lavalink`) is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let slug = lower.strip_prefix(NAV_ID_PREFIX).unwrap_or(&lower);

        Self::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| ViewError::UnknownPage(s.to_string()))
    }
}

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    Documentation,
    Resources,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [
        NavSection::Home,
        NavSection::Documentation,
        NavSection::Resources,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Documentation => "Documentation",
            NavSection::Resources => "Resources",
        }
    }

    /// Pages listed under this section, in sidebar order.
    pub fn pages(self) -> impl Iterator<Item = PageId> {
        PageId::ALL
            .into_iter()
            .filter(move |page| page.section() == self)
    }
}

fn strip_nav_prefix(id: &str) -> &str {
    match id.get(..NAV_ID_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(NAV_ID_PREFIX) => &id[NAV_ID_PREFIX.len()..],
        _ => id,
    }
}

/// A navigation intent.
///
/// Anything that is not a known page is carried verbatim so the placeholder
/// can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Page(PageId),
    Unknown(String),
}

impl Route {
    /// Resolves an identifier to a route. Never fails.
    ///
    /// A leading `nav-` (any case) is dropped, so element ids and slugs
    /// resolve to the same route.
    pub fn parse(id: &str) -> Self {
        match id.parse::<PageId>() {
            Ok(page) => Route::Page(page),
            Err(_) => Route::Unknown(strip_nav_prefix(id.trim()).to_string()),
        }
    }

    /// The identifier as it appears in the breadcrumb and nav ids.
    pub fn slug(&self) -> &str {
        match self {
            Route::Page(page) => page.slug(),
            Route::Unknown(id) => id,
        }
    }

    /// Element id of the navigation entry this route marks active.
    pub fn nav_id(&self) -> String {
        format!("{NAV_ID_PREFIX}{}", self.slug())
    }

    pub fn page(&self) -> Option<PageId> {
        match self {
            Route::Page(page) => Some(*page),
            Route::Unknown(_) => None,
        }
    }

    pub fn breadcrumb(&self) -> Breadcrumb {
        match self {
            Route::Page(page) => page.breadcrumb(),
            Route::Unknown(id) => Breadcrumb::new(NavSection::Documentation.label(), id.clone()),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Page(PageId::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        Route::Page(page)
    }
}

impl From<&str> for Route {
    fn from(id: &str) -> Self {
        Route::parse(id)
    }
}

impl From<String> for Route {
    fn from(id: String) -> Self {
        Route::parse(&id)
    }
}

impl From<&Route> for Route {
    fn from(route: &Route) -> Self {
        route.clone()
    }
}

/// `Section / Title` label shown above the content region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breadcrumb {
    pub section: String,
    pub title: String,
}

impl Breadcrumb {
    pub fn new(section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.section, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PageId::Home, "Home / Introduction")]
    #[test_case(PageId::Status, "Home / Status")]
    #[test_case(PageId::Discord, "Home / Discord")]
    #[test_case(PageId::Lavalink, "Documentation / Lavalink v4")]
    #[test_case(PageId::MusicBot, "Documentation / Music Bot")]
    #[test_case(PageId::ImageApi, "Documentation / Image Generation API")]
    #[test_case(PageId::GameServers, "Documentation / Game Servers")]
    #[test_case(PageId::Websites, "Documentation / Websites")]
    #[test_case(PageId::Api, "Documentation / API")]
    #[test_case(PageId::DtempireBot, "Documentation / DTEmpire Bot")]
    #[test_case(PageId::Invite, "Resources / Invite Bot")]
    #[test_case(PageId::Github, "Resources / GitHub")]
    fn breadcrumbs(page: PageId, expected: &str) {
        assert_eq!(page.breadcrumb().to_string(), expected);
    }

    #[test]
    fn slugs_round_trip_through_from_str() {
        for page in PageId::ALL {
            assert_eq!(page.slug().parse::<PageId>().unwrap(), page);
            assert_eq!(page.nav_id().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Music-Bot".parse::<PageId>().unwrap(), PageId::MusicBot);
        assert_eq!("  GITHUB ".parse::<PageId>().unwrap(), PageId::Github);
    }

    #[test]
    fn unknown_page_error_lists_available_pages() {
        let err = "wiki".parse::<PageId>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("wiki"));
        assert!(msg.contains("lavalink"));
    }

    #[test]
    fn unknown_routes_keep_their_id() {
        let route = Route::parse("changelog");
        assert_eq!(route, Route::Unknown("changelog".to_string()));
        assert_eq!(route.nav_id(), "nav-changelog");
        assert_eq!(route.breadcrumb().to_string(), "Documentation / changelog");
        assert!(route.page().is_none());
    }

    #[test]
    fn unknown_nav_ids_drop_their_prefix() {
        let route = Route::parse("NAV-Roadmap");
        assert_eq!(route, Route::Unknown("Roadmap".to_string()));
        assert_eq!(route.nav_id(), "nav-Roadmap");
        assert_eq!(Route::parse("nav-roadmap").nav_id(), "nav-roadmap");
    }

    #[test]
    fn every_page_belongs_to_exactly_one_section() {
        let listed: usize = NavSection::ALL.iter().map(|s| s.pages().count()).sum();
        assert_eq!(listed, PageId::ALL.len());
    }

    #[test]
    fn home_links_to_root() {
        assert_eq!(PageId::Home.href(), "/");
        assert_eq!(PageId::GameServers.href(), "/game-servers.html");
    }
}
