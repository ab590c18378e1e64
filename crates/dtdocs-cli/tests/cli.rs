//! CLI tests that run without binding a port.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dtdocs(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dtdocs").unwrap();
    cmd.arg("--no-color")
        .arg("--project-dir")
        .arg(project.path())
        .env_remove("SERVER_PORT")
        .env_remove("DTDOCS_SERVER__PORT");
    cmd
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("dtdocs")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dtdocs"));
}

#[test]
fn version_command_succeeds() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("DTEmpire Docs"));
}

#[test]
fn pages_lists_every_slug() {
    let project = TempDir::new().unwrap();
    let output = dtdocs(&project).arg("pages").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for slug in ["home", "lavalink", "music-bot", "dtempire-bot", "github"] {
        assert!(stdout.contains(slug), "missing {slug} in:\n{stdout}");
    }
}

#[test]
fn render_prints_the_shell_with_the_page_active() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .args(["render", "lavalink"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Documentation / Lavalink v4"))
        .stdout(predicate::str::contains(
            "id=\"nav-lavalink\" class=\"active nav-active nav-link\"",
        ));
}

#[test]
fn render_light_theme() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .args(["render", "home", "--theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class=\"light-theme\""))
        .stdout(predicate::str::contains("--primary: #006400;"));
}

#[test]
fn render_unknown_page_lists_available_pages() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .args(["render", "wiki"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown page 'wiki'"))
        .stderr(predicate::str::contains("music-bot"));
}

#[test]
fn render_rejects_unknown_theme() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .args(["render", "home", "--theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn build_writes_the_site() {
    let project = TempDir::new().unwrap();
    let out = project.path().join("public");

    dtdocs(&project)
        .arg("build")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 13 files"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Home / Introduction"));
    assert!(out.join("game-servers.html").exists());
    assert!(out.join("styles.css").exists());
}

#[test]
fn build_uses_configured_root_and_title() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("dtdocs.toml"),
        "[server]\nroot = \"dist\"\n\n[site]\ntitle = \"Empire Docs\"\n",
    )
    .unwrap();

    dtdocs(&project).arg("build").assert().success();

    let index = fs::read_to_string(project.path().join("dist/index.html")).unwrap();
    assert!(index.contains("<title>Empire Docs</title>"));
}

#[test]
fn invalid_server_port_is_reported() {
    let project = TempDir::new().unwrap();
    dtdocs(&project)
        .env("SERVER_PORT", "not-a-port")
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SERVER_PORT"));
}

#[test]
fn serve_help_shows_options() {
    Command::cargo_bin("dtdocs")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--root"));
}
