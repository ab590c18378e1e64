//! In-page console.
//!
//! Input is trimmed and lowercased before lookup. Replies are plain text;
//! escaping happens when the router writes them into the output panel.

use crate::PageId;
use crate::pages::data::{DISCORD_SERVER_URL, GITHUB_URL, LIVE_MONITOR_URL};

/// Prompt echoed in front of every command.
pub const PROMPT: &str = "dtempire@docs:~$";

const HELP: &str = "Available commands: help, status, discord, github, clear, about, theme, home";
const ABOUT: &str = "DTEmpire -  Documentation System v1.6.9 | Made By DargoTamber";

/// Side effect requested by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEffect {
    /// Empty the output panel before printing the reply.
    Clear,
    ToggleTheme,
    Navigate(PageId),
    /// Open an external URL in a new window.
    Open(&'static str),
}

/// Result of running one console line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleReply {
    /// Normalised command as echoed after the prompt. Empty for blank input.
    pub command: String,
    pub lines: Vec<String>,
    pub effect: Option<ConsoleEffect>,
}

impl ConsoleReply {
    fn say(command: String, line: &str, effect: Option<ConsoleEffect>) -> Self {
        Self {
            command,
            lines: vec![line.to_string()],
            effect,
        }
    }

    /// Blank input: nothing is echoed or printed.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Runs one console line.
pub fn execute(line: &str) -> ConsoleReply {
    let command = line.trim().to_lowercase();

    let (text, effect) = match command.as_str() {
        "" => return ConsoleReply::default(),
        "help" => (HELP, None),
        "status" => (
            "Opening status dashboard...",
            Some(ConsoleEffect::Open(LIVE_MONITOR_URL)),
        ),
        "discord" => (
            "Opening Discord server invite...",
            Some(ConsoleEffect::Open(DISCORD_SERVER_URL)),
        ),
        "github" => (
            "Opening GitHub repository...",
            Some(ConsoleEffect::Open(GITHUB_URL)),
        ),
        "clear" => ("Terminal cleared.", Some(ConsoleEffect::Clear)),
        "about" => (ABOUT, None),
        "theme" => ("Theme toggled.", Some(ConsoleEffect::ToggleTheme)),
        "home" => (
            "Loading home page...",
            Some(ConsoleEffect::Navigate(PageId::Home)),
        ),
        "ls" => ("index.html  styles.css  script.js  server.js", None),
        "pwd" => ("/home/container/", None),
        "whoami" => ("dtempire@docs", None),
        _ => {
            let text =
                format!("Command not found: {command}. Type 'help' for available commands.");
            return ConsoleReply {
                command,
                lines: vec![text],
                effect: None,
            };
        }
    };

    ConsoleReply::say(command, text, effect)
}
