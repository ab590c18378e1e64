//! Static page data: links, command tables, endpoints and listings.
//!
//! Credentials (node passwords, database URLs, third-party API keys) are
//! deliberately absent. Pages point readers to the Discord server instead.

pub const LIVE_MONITOR_URL: &str = "https://live-monitor.ankitgupta.com.np/";
pub const LAVALINK_STATUS_URL: &str = "https://lavalink.ankitgupta.com.np/";
pub const DISCORD_SERVER_URL: &str = "http://dsc.gg/dtempire-server";
pub const OFFICIAL_BOT_URL: &str = "http://dsc.gg/dtempire";
pub const MUSIC_BOT_URL: &str = "http://dsc.gg/dtempire-music";
pub const GITHUB_URL: &str = "https://github.com/hyperdargo";
pub const GITHUB_REPOS_URL: &str = "https://github.com/hyperdargo?tab=repositories";
pub const IMAGE_API_URL: &str = "https://imggen-api.ankitgupta.com.np/";
pub const IMAGE_SITE_URL: &str = "https://imggen.ankitgupta.com.np";
pub const AI_CHAT_URL: &str = "https://ai.ankitgupta.com.np/";
pub const SECURE_CHAT_URL: &str = "https://chat.ankitgupta.com.np/login";
pub const AI_API_URL: &str = "http://158.69.214.8:9853/dtempire-ai";

pub const LAVALINK_HOST: &str = "panel.ankitgupta.com.np";
pub const LAVALINK_PORT: u16 = 25574;

#[derive(Debug)]
pub struct QuickLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug)]
pub struct Command {
    pub usage: &'static str,
    pub summary: &'static str,
}

#[derive(Debug)]
pub struct CommandGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub commands: &'static [Command],
}

#[derive(Debug)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

#[derive(Debug)]
pub struct GameServer {
    pub icon: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub access: &'static str,
    pub detail_label: &'static str,
    pub detail: &'static str,
    pub address: &'static str,
}

#[derive(Debug)]
pub struct Website {
    pub icon: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Debug)]
pub struct BotInvite {
    pub icon: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub url: &'static str,
}

const fn cmd(usage: &'static str, summary: &'static str) -> Command {
    Command { usage, summary }
}

const fn endpoint(path: &'static str, summary: &'static str) -> Endpoint {
    Endpoint {
        method: "GET",
        path,
        summary,
    }
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        icon: "fab fa-discord",
        label: "Join Discord Server",
        url: DISCORD_SERVER_URL,
    },
    QuickLink {
        icon: "fas fa-robot",
        label: "Invite DTEmpire Bot",
        url: OFFICIAL_BOT_URL,
    },
    QuickLink {
        icon: "fas fa-music",
        label: "Invite Music Bot",
        url: MUSIC_BOT_URL,
    },
    QuickLink {
        icon: "fas fa-chart-line",
        label: "Live Status",
        url: LIVE_MONITOR_URL,
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "20+",
        label: "Active Services",
    },
    Stat {
        value: "98.2%",
        label: "Uptime Average",
    },
    Stat {
        value: "100+",
        label: "Discord Users",
    },
    Stat {
        value: "24/7",
        label: "Monitoring",
    },
];

pub const MUSIC_FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-play-circle",
        title: "High Quality Audio",
        summary: "Premium 128kbps audio streaming",
    },
    Feature {
        icon: "fab fa-youtube",
        title: "Multi-Platform",
        summary: "YouTube, Spotify, SoundCloud support",
    },
    Feature {
        icon: "fas fa-list-ol",
        title: "Queue System",
        summary: "Advanced queue with playlist support",
    },
    Feature {
        icon: "fas fa-filter",
        title: "Audio Filters",
        summary: "Bass boost, nightcore, vaporwave effects",
    },
    Feature {
        icon: "fas fa-volume-up",
        title: "Volume Control",
        summary: "Per-user volume adjustment",
    },
    Feature {
        icon: "fas fa-headphones",
        title: "24/7 Radio",
        summary: "Non-stop music streaming",
    },
];

pub const MUSIC_COMMANDS: &[Command] = &[
    cmd("!play <song>", "Play a song or add to queue"),
    cmd("!pause", "Pause current track"),
    cmd("!resume", "Resume playback"),
    cmd("!skip", "Skip current song"),
    cmd("!stop", "Stop playback and clear queue"),
    cmd("!queue", "Show current queue"),
    cmd("!volume <0-100>", "Adjust player volume"),
    cmd("!shuffle", "Shuffle the queue"),
    cmd("!loop", "Toggle queue loop"),
    cmd("!remove <position>", "Remove track from queue"),
    cmd("!clear", "Clear current queue"),
    cmd("!status", "Show player status"),
    cmd("!help", "Show help message"),
];

pub const IMAGE_ENDPOINTS: &[Endpoint] = &[
    endpoint("/api/pollination", "Image Generation"),
    endpoint("/api/tts", "Text-to-Speech"),
    endpoint("/api/ai-text", "AI Text Generation"),
    endpoint("/api/image-card", "Image Card Generator"),
];

pub const POLLINATION_PARAMS: &[Command] = &[
    cmd("prompt", "(required) Text description"),
    cmd("model", "(optional) flux, seeddream, turbo, kontext"),
    cmd("width", "(optional) Default: 512"),
    cmd("height", "(optional) Default: 512"),
];

pub const GAME_SERVERS: &[GameServer] = &[
    GameServer {
        icon: "fas fa-users",
        name: "Prominence II: Hasturian Era",
        kind: "Public Modded Server",
        access: "Open for everyone",
        detail_label: "Mod Pack",
        detail: "Custom mod collection",
        address: "panel.ankitgupta.com.np:25571",
    },
    GameServer {
        icon: "fas fa-lock",
        name: "Kreate Mod Server",
        kind: "Private Technical Server",
        access: "Ask admin for access",
        detail_label: "Focus",
        detail: "Automation & Creativity",
        address: "panel.ankitgupta.com.np:25565",
    },
    GameServer {
        icon: "fas fa-tree",
        name: "WarmBrew SMP",
        kind: "Public Vanilla Server",
        access: "Open for everyone",
        detail_label: "Style",
        detail: "Survival Multiplayer",
        address: "panel.ankitgupta.com.np:25572",
    },
];

pub const WEBSITES: &[Website] = &[
    Website {
        icon: "fas fa-paint-brush",
        name: "Image Generation",
        summary: "Free AI image generation website with multiple models.",
        highlights: &["Flux model", "Turbo model", "Seeddream model"],
        url: IMAGE_SITE_URL,
    },
    Website {
        icon: "fas fa-robot",
        name: "AI Chat",
        summary: "Official DTEmpire AI chatbot for answering questions.",
        highlights: &[
            "Handles small tasks",
            "Provides detailed answers",
            "No chat memory (stateless)",
        ],
        url: AI_CHAT_URL,
    },
    Website {
        icon: "fas fa-shield-alt",
        name: "SecurePKIChat",
        summary: "PKI-encrypted secure chat server (Beta).",
        highlights: &[
            "End-to-end encryption",
            "Currently in beta",
            "Stable with no known bugs",
        ],
        url: SECURE_CHAT_URL,
    },
];

pub const BOT_COMMAND_GROUPS: &[CommandGroup] = &[
    CommandGroup {
        icon: "fas fa-shield-alt",
        title: "Moderation",
        commands: &[
            cmd(".ban", "Ban users"),
            cmd(".kick", "Kick users"),
            cmd(".mute", "Mute users"),
            cmd(".warn", "Warn users"),
            cmd(".clear", "Clear messages"),
        ],
    },
    CommandGroup {
        icon: "fas fa-cogs",
        title: "Utility",
        commands: &[
            cmd(".userinfo", "User information"),
            cmd(".serverinfo", "Server information"),
            cmd(".avatar", "Show avatar"),
            cmd(".ping", "Bot latency"),
            cmd(".uptime", "Bot uptime"),
        ],
    },
    CommandGroup {
        icon: "fas fa-gamepad",
        title: "Fun",
        commands: &[
            cmd(".gif", "Search GIFs"),
            cmd(".minecraft", "MC server info"),
            cmd(".slot", "Slot machine"),
            cmd(".8ball", "Magic 8 ball"),
        ],
    },
];

pub const AI_COMMANDS: &[Command] = &[
    cmd(",ai <prompt>", "Generate AI response"),
    cmd(",setchannel-ai #channel", "Add AI auto-reply channel"),
    cmd(",removechannel-ai #channel", "Remove AI channel"),
];

pub const TTS_COMMANDS: &[Command] = &[
    cmd(",tts <text>", "Text to speech"),
    cmd(",tts --ai <prompt>", "AI enhanced TTS"),
    cmd(",ttsvoice <text>", "TTS in voice channel"),
];

pub const IMAGE_MODELS: &[Command] = &[
    cmd("flux", "Recommended (Default)"),
    cmd("seeddream", "New model"),
    cmd("turbo", "Fast generation"),
    cmd("kontext", "Premium model"),
];

pub const CHAT_BOT_COMMANDS: &[Command] = &[
    cmd("?ai <message>", "Chat with AI"),
    cmd("?setchannel-ai", "Enable auto-AI replies"),
    cmd("?removechannel-ai", "Disable auto-AI replies"),
    cmd("?ai-help", "Show help message"),
];

pub const CONTRIBUTIONS: &[Feature] = &[
    Feature {
        icon: "fas fa-bug",
        title: "Report bugs and issues",
        summary: "",
    },
    Feature {
        icon: "fas fa-lightbulb",
        title: "Suggest new features",
        summary: "",
    },
    Feature {
        icon: "fas fa-code",
        title: "Submit pull requests",
        summary: "",
    },
    Feature {
        icon: "fas fa-book",
        title: "Improve documentation",
        summary: "",
    },
    Feature {
        icon: "fas fa-share",
        title: "Share with others",
        summary: "",
    },
];

pub const DISCORD_CHANNELS: &[Feature] = &[
    Feature {
        icon: "fas fa-headset",
        title: "Support & Help",
        summary: "Get help with setting up our services, troubleshooting issues, or asking questions about our products.",
    },
    Feature {
        icon: "fas fa-bullhorn",
        title: "Announcements",
        summary: "Stay updated with the latest news, updates, and maintenance schedules for all DTEmpire services.",
    },
    Feature {
        icon: "fas fa-robot",
        title: "Bot Testing",
        summary: "Test our Discord bots before inviting them to your server. Try commands, check features, and see the bots in action.",
    },
];

pub const DISCORD_LINKS: &[BotInvite] = &[
    BotInvite {
        icon: "fas fa-users",
        name: "DTEmpire Server",
        summary: "Main community server for support, announcements, and discussions",
        features: &[],
        url: DISCORD_SERVER_URL,
    },
    BotInvite {
        icon: "fas fa-robot",
        name: "DTEmpire Official Bot",
        summary: "Multi-purpose bot with moderation, utility, and fun commands",
        features: &[],
        url: OFFICIAL_BOT_URL,
    },
    BotInvite {
        icon: "fas fa-music",
        name: "DTEmpire Music Bot",
        summary: "High-quality music bot with YouTube, Spotify, and SoundCloud support",
        features: &[],
        url: MUSIC_BOT_URL,
    },
];

pub const BOT_INVITES: &[BotInvite] = &[
    BotInvite {
        icon: "fab fa-discord",
        name: "DTEmpire Official Bot",
        summary: "200+ commands including moderation, utility, fun, and more",
        features: &[
            "Advanced moderation tools",
            "Server management utilities",
            "Fun and entertainment commands",
            "Image generation with AI",
            "TTS and AI chat features",
        ],
        url: OFFICIAL_BOT_URL,
    },
    BotInvite {
        icon: "fas fa-music",
        name: "DTEmpire Music Bot",
        summary: "High-quality music playback with advanced features",
        features: &[
            "YouTube, Spotify, SoundCloud support",
            "Premium 128kbps audio quality",
            "Audio filters and effects",
            "Advanced queue system",
            "Per-user volume control",
        ],
        url: MUSIC_BOT_URL,
    },
];
