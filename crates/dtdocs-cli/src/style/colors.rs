//! Semantic color palette for terminal output.
//!
//! The site's terminal green doubles as the CLI accent color.

use owo_colors::{OwoColorize, Style};

/// Accent style for headings and the banner frame (bright green bold).
pub fn accent_style() -> Style {
    Style::new().bright_green().bold()
}

/// Success messages (green bold).
pub fn success_style() -> Style {
    Style::new().green().bold()
}

/// Warnings (yellow).
pub fn warning_style() -> Style {
    Style::new().yellow()
}

/// Secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    fn accent(&self) -> String;
    fn success(&self) -> String;
    fn warning(&self) -> String;
    fn muted(&self) -> String;
}

fn styled(value: &impl std::fmt::Display, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn accent(&self) -> String {
        styled(self, accent_style())
    }

    fn success(&self) -> String {
        styled(self, success_style())
    }

    fn warning(&self) -> String {
        styled(self, warning_style())
    }

    fn muted(&self) -> String {
        styled(self, muted_style())
    }
}
