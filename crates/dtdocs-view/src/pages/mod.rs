//! Page builders.
//!
//! Building is pure: a [`Route`] goes in, a [`Rendered`] value comes out,
//! and nothing else is touched. Applying the result to a document is the
//! router's job.

pub mod data;

use askama::Template;

use crate::{Breadcrumb, PageId, Route, Theme, ViewResult, ViewState};

use data::{
    BotInvite, Command, CommandGroup, Endpoint, Feature, GameServer, QuickLink, Stat, Website,
};

/// A fully built page, ready to be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub route: Route,
    pub breadcrumb: Breadcrumb,
    /// Inner HTML for the content region.
    pub content: String,
}

impl Rendered {
    /// Element id of the navigation entry to mark active.
    pub fn active_nav(&self) -> String {
        self.route.nav_id()
    }

    /// Whether this is the "coming soon" page for an unknown route.
    pub fn is_placeholder(&self) -> bool {
        self.route.page().is_none()
    }
}

/// Builds the page for a route. Unknown routes build the placeholder.
///
/// The output depends only on `route` and `state`.
pub fn build(route: &Route, state: &ViewState) -> ViewResult<Rendered> {
    let content = match route {
        Route::Page(page) => render_page(*page, state.theme())?,
        Route::Unknown(id) => PlaceholderPage::new(id, state.theme()).render()?,
    };

    Ok(Rendered {
        route: route.clone(),
        breadcrumb: route.breadcrumb(),
        content,
    })
}

/// Renders the content fragment of a known page.
pub fn render_page(page: PageId, theme: Theme) -> ViewResult<String> {
    let html = match page {
        PageId::Home => HomePage {
            page,
            theme,
            quick_links: data::QUICK_LINKS,
            stats: data::STATS,
            monitor_url: data::LIVE_MONITOR_URL,
            discord_url: data::DISCORD_SERVER_URL,
            bot_url: data::OFFICIAL_BOT_URL,
            music_url: data::MUSIC_BOT_URL,
            discord_href: PageId::Discord.href(),
            api_href: PageId::Api.href(),
        }
        .render()?,
        PageId::Status => StatusPage {
            page,
            theme,
            monitor_url: data::LIVE_MONITOR_URL,
            lavalink_status_url: data::LAVALINK_STATUS_URL,
        }
        .render()?,
        PageId::Discord => DiscordPage {
            page,
            theme,
            channels: data::DISCORD_CHANNELS,
            links: data::DISCORD_LINKS,
        }
        .render()?,
        PageId::Lavalink => LavalinkPage {
            page,
            theme,
            host: data::LAVALINK_HOST,
            port: data::LAVALINK_PORT,
            status_url: data::LAVALINK_STATUS_URL,
            monitor_url: data::LIVE_MONITOR_URL,
            discord_url: data::DISCORD_SERVER_URL,
        }
        .render()?,
        PageId::MusicBot => MusicBotPage {
            page,
            theme,
            invite_url: data::MUSIC_BOT_URL,
            features: data::MUSIC_FEATURES,
            commands: data::MUSIC_COMMANDS,
            lavalink_href: PageId::Lavalink.href(),
        }
        .render()?,
        PageId::ImageApi => ImageApiPage {
            page,
            theme,
            api_url: data::IMAGE_API_URL,
            site_url: data::IMAGE_SITE_URL,
            endpoints: data::IMAGE_ENDPOINTS,
            params: data::POLLINATION_PARAMS,
        }
        .render()?,
        PageId::GameServers => GameServersPage {
            page,
            theme,
            servers: data::GAME_SERVERS,
            monitor_url: data::LIVE_MONITOR_URL,
        }
        .render()?,
        PageId::Websites => WebsitesPage {
            page,
            theme,
            sites: data::WEBSITES,
            ai_api_url: data::AI_API_URL,
        }
        .render()?,
        PageId::Api => ApiPage {
            page,
            theme,
            api_url: data::IMAGE_API_URL,
            endpoints: data::IMAGE_ENDPOINTS,
            ai_api_url: data::AI_API_URL,
            host: data::LAVALINK_HOST,
            port: data::LAVALINK_PORT,
            lavalink_status_url: data::LAVALINK_STATUS_URL,
            discord_url: data::DISCORD_SERVER_URL,
        }
        .render()?,
        PageId::DtempireBot => DtempireBotPage {
            page,
            theme,
            invite_url: data::OFFICIAL_BOT_URL,
            groups: data::BOT_COMMAND_GROUPS,
            ai_commands: data::AI_COMMANDS,
            tts_commands: data::TTS_COMMANDS,
            models: data::IMAGE_MODELS,
            chat_commands: data::CHAT_BOT_COMMANDS,
        }
        .render()?,
        PageId::Invite => InvitePage {
            page,
            theme,
            bots: data::BOT_INVITES,
        }
        .render()?,
        PageId::Github => GithubPage {
            page,
            theme,
            github_url: data::GITHUB_URL,
            repos_url: data::GITHUB_REPOS_URL,
            contributions: data::CONTRIBUTIONS,
        }
        .render()?,
    };

    Ok(html)
}

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomePage {
    page: PageId,
    theme: Theme,
    quick_links: &'static [QuickLink],
    stats: &'static [Stat],
    monitor_url: &'static str,
    discord_url: &'static str,
    bot_url: &'static str,
    music_url: &'static str,
    discord_href: String,
    api_href: String,
}

#[derive(Template)]
#[template(path = "pages/status.html")]
struct StatusPage {
    page: PageId,
    theme: Theme,
    monitor_url: &'static str,
    lavalink_status_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/discord.html")]
struct DiscordPage {
    page: PageId,
    theme: Theme,
    channels: &'static [Feature],
    links: &'static [BotInvite],
}

#[derive(Template)]
#[template(path = "pages/lavalink.html")]
struct LavalinkPage {
    page: PageId,
    theme: Theme,
    host: &'static str,
    port: u16,
    status_url: &'static str,
    monitor_url: &'static str,
    discord_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/music_bot.html")]
struct MusicBotPage {
    page: PageId,
    theme: Theme,
    invite_url: &'static str,
    features: &'static [Feature],
    commands: &'static [Command],
    lavalink_href: String,
}

#[derive(Template)]
#[template(path = "pages/image_api.html")]
struct ImageApiPage {
    page: PageId,
    theme: Theme,
    api_url: &'static str,
    site_url: &'static str,
    endpoints: &'static [Endpoint],
    params: &'static [Command],
}

#[derive(Template)]
#[template(path = "pages/game_servers.html")]
struct GameServersPage {
    page: PageId,
    theme: Theme,
    servers: &'static [GameServer],
    monitor_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/websites.html")]
struct WebsitesPage {
    page: PageId,
    theme: Theme,
    sites: &'static [Website],
    ai_api_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/api.html")]
struct ApiPage {
    page: PageId,
    theme: Theme,
    api_url: &'static str,
    endpoints: &'static [Endpoint],
    ai_api_url: &'static str,
    host: &'static str,
    port: u16,
    lavalink_status_url: &'static str,
    discord_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/dtempire_bot.html")]
struct DtempireBotPage {
    page: PageId,
    theme: Theme,
    invite_url: &'static str,
    groups: &'static [CommandGroup],
    ai_commands: &'static [Command],
    tts_commands: &'static [Command],
    models: &'static [Command],
    chat_commands: &'static [Command],
}

#[derive(Template)]
#[template(path = "pages/invite.html")]
struct InvitePage {
    page: PageId,
    theme: Theme,
    bots: &'static [BotInvite],
}

#[derive(Template)]
#[template(path = "pages/github.html")]
struct GithubPage {
    page: PageId,
    theme: Theme,
    github_url: &'static str,
    repos_url: &'static str,
    contributions: &'static [Feature],
}

/// "Coming soon" page for identifiers with no page of their own.
#[derive(Template)]
#[template(path = "pages/placeholder.html")]
struct PlaceholderPage<'a> {
    id: &'a str,
    theme: Theme,
    home_href: String,
    status_href: String,
    discord_href: String,
}

impl<'a> PlaceholderPage<'a> {
    fn new(id: &'a str, theme: Theme) -> Self {
        Self {
            id,
            theme,
            home_href: PageId::Home.href(),
            status_href: PageId::Status.href(),
            discord_href: PageId::Discord.href(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_renders_its_own_fragment() {
        for page in PageId::ALL {
            let rendered = build(&Route::Page(page), &ViewState::default()).unwrap();
            assert!(!rendered.is_placeholder());
            assert!(
                rendered
                    .content
                    .contains(&format!("data-page=\"{}\"", page.slug())),
                "{page} fragment is missing its data-page marker"
            );
            assert_eq!(rendered.breadcrumb, page.breadcrumb());
            assert_eq!(rendered.active_nav(), page.nav_id());
        }
    }

    #[test]
    fn building_is_deterministic() {
        for page in PageId::ALL {
            let route = Route::Page(page);
            let state = ViewState::default();
            assert_eq!(build(&route, &state).unwrap(), build(&route, &state).unwrap());
        }
    }

    #[test]
    fn placeholder_echoes_the_requested_id() {
        let rendered = build(&Route::parse("changelog"), &ViewState::default()).unwrap();
        assert!(rendered.is_placeholder());
        assert!(rendered.content.contains("changelog"));
        assert!(rendered.content.contains("coming soon"));
        assert_eq!(rendered.breadcrumb.to_string(), "Documentation / changelog");
    }

    #[test]
    fn placeholder_links_back_to_known_pages() {
        let rendered = build(&Route::parse("changelog"), &ViewState::default()).unwrap();
        assert!(rendered.content.contains("href=\"/\""));
        assert!(rendered.content.contains("/status.html"));
        assert!(rendered.content.contains("/discord.html"));
    }

    #[test]
    fn placeholder_escapes_markup_in_the_id() {
        let route = Route::parse("<script>alert(1)</script>");
        let rendered = build(&route, &ViewState::default()).unwrap();
        assert!(!rendered.content.contains("<script>"));
        assert!(rendered.content.contains("&lt;script&gt;"));
    }

    #[test]
    fn fragments_carry_the_current_theme() {
        let light = ViewState::new(Theme::Light);
        let rendered = build(&Route::Page(PageId::Status), &light).unwrap();
        assert!(rendered.content.contains("data-theme=\"light\""));

        let rendered = build(&Route::parse("changelog"), &light).unwrap();
        assert!(rendered.content.contains("data-theme=\"light\""));
    }

    #[test]
    fn pages_never_render_credentials() {
        for page in PageId::ALL {
            let html = render_page(page, Theme::Dark).unwrap();
            assert!(!html.contains("mongodb+srv"), "{page} leaks a database URL");
            assert!(!html.contains("\"password\""), "{page} leaks a node password");
            assert!(!html.contains("Password:"), "{page} leaks a node password");
            assert!(!html.contains("AIza"), "{page} leaks an API key");
        }
    }

    #[test]
    fn command_tables_are_escaped() {
        let html = render_page(PageId::MusicBot, Theme::Dark).unwrap();
        assert!(html.contains("!play &lt;song&gt;"));
    }

    #[test]
    fn game_server_addresses_are_listed() {
        let html = render_page(PageId::GameServers, Theme::Dark).unwrap();
        for server in data::GAME_SERVERS {
            assert!(html.contains(server.address));
        }
    }
}
