//! Startup and version banners.

use std::net::SocketAddr;

use super::colors::SemanticStyle;

const TITLE: &str = "DTEmpire Documentation Server";

/// Lines of the boxed startup banner, uncolored.
pub fn server_banner_lines(addr: SocketAddr, started: &str) -> Vec<String> {
    let rows = [format!("Server: http://{addr}"), format!("Time: {started}")];
    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .chain(std::iter::once(TITLE.chars().count()))
        .max()
        .unwrap_or_default()
        + 4;

    let rule = "═".repeat(width);
    let line = |text: &str| {
        let pad = width - 2 - text.chars().count();
        format!("║  {text}{}║", " ".repeat(pad))
    };

    let mut lines = vec![format!("╔{rule}╗"), line(TITLE), format!("╠{rule}╣")];
    lines.extend(rows.iter().map(|row| line(row)));
    lines.push(format!("╚{rule}╝"));
    lines
}

/// Prints the startup banner.
pub fn print_server_banner(addr: SocketAddr, started: &str) {
    for line in server_banner_lines(addr, started) {
        println!("{}", line.accent());
    }
}

/// Prints the version banner.
pub fn print_version_banner(version: &str) {
    println!();
    println!(
        "  {} {} {}",
        "◆".accent(),
        "DTEmpire Docs".accent(),
        format!("v{version}").muted()
    );
    println!("  {}", "Documentation site builder and server".muted());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_box_is_aligned() {
        let addr: SocketAddr = "0.0.0.0:25587".parse().unwrap();
        let lines = server_banner_lines(addr, "2026-10-18 12:00:00");

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("DTEmpire Documentation Server"));
        assert!(lines[3].contains("Server: http://0.0.0.0:25587"));
        assert!(lines[4].contains("Time: 2026-10-18 12:00:00"));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
