//! Integration tests for the earthling CLI
//!
//! Smoke tests through the real binary, plus end-to-end runs of the batch
//! export and the HTTP server against a mock upstream.

use std::collections::HashMap;
use std::time::Duration;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use super::common::{MockUpstream, character_json, page_json};

fn earthling() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("earthling"))
}

/// Write an earthling.toml pointing the binary at a mock upstream
fn write_config(dir: &std::path::Path, mock: &MockUpstream, port: Option<u16>) {
    let mut config = format!(
        "[upstream]\nbase_url = \"{0}/api/character\"\nprobe_url = \"{0}/api/character/1\"\ntimeout_secs = 5\n",
        mock.base_url
    );
    if let Some(port) = port {
        config.push_str(&format!("\n[server]\nport = {port}\n"));
    }
    std::fs::write(dir.join("earthling.toml"), config).unwrap();
}

fn roster_mock() -> MockUpstream {
    MockUpstream::spawn(|base| {
        let mut routes = HashMap::new();
        routes.insert(
            "/api/character".to_string(),
            (
                200,
                page_json(
                    &[
                        character_json("Rick Sanchez", "Human", "Alive", "Earth (C-137)", "Earth"),
                        character_json("Birdperson", "Alien", "Alive", "Bird World", "Bird World"),
                    ],
                    Some(&format!("{base}/api/character?page=2")),
                ),
            ),
        );
        routes.insert(
            "/api/character?page=2".to_string(),
            (
                200,
                page_json(
                    &[character_json("Morty Smith", "Human", "Alive", "Earth (C-137)", "Earth")],
                    None,
                ),
            ),
        );
        routes.insert(
            "/api/character/1".to_string(),
            (
                200,
                character_json("Rick Sanchez", "Human", "Alive", "Earth (C-137)", "Earth")
                    .to_string(),
            ),
        );
        routes
    })
}

// =============================================================================
// SMOKE TESTS
// =============================================================================

#[test]
fn test_version() {
    earthling()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("earthling v"));
}

#[test]
fn test_version_json() {
    let output = earthling().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["version"].is_string());
}

#[test]
fn test_help() {
    earthling()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("living humans"));
}

#[test]
fn test_no_args_shows_info() {
    earthling()
        .assert()
        .success()
        .stdout(predicate::str::contains("earthling"));
}

// =============================================================================
// BATCH EXPORT
// =============================================================================

#[test]
fn test_export_writes_characters_csv() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    write_config(temp.path(), &mock, None);

    earthling()
        .arg("export")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Getting characters"))
        .stdout(predicate::str::contains("Done! Found 2 characters"));

    let csv = std::fs::read_to_string(temp.path().join("characters.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Name,Origin,Location,Image");
    assert!(lines[1].starts_with("Rick Sanchez,"));
    assert!(lines[2].starts_with("Morty Smith,"));
}

#[test]
fn test_export_json_output() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    write_config(temp.path(), &mock, None);

    let output = earthling()
        .args(["--json", "export"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["path"], "characters.csv");
}

#[test]
fn test_export_fails_when_upstream_is_down() {
    let temp = TempDir::new().unwrap();

    // Config points at a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    std::fs::write(
        temp.path().join("earthling.toml"),
        format!(
            "[upstream]\nbase_url = \"http://127.0.0.1:{port}/api/character\"\nprobe_url = \"http://127.0.0.1:{port}/api/character/1\"\ntimeout_secs = 2\n"
        ),
    )
    .unwrap();

    earthling()
        .arg("export")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("upstream request failed"));

    assert!(!temp.path().join("characters.csv").exists());
}

// =============================================================================
// HTTP SERVER (END TO END)
// =============================================================================

/// Kill the server process when the test ends, pass or fail
struct ServerGuard(std::process::Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn spawn_server(temp: &TempDir, mock: &MockUpstream) -> (ServerGuard, String) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    write_config(temp.path(), mock, Some(port));

    let child = std::process::Command::new(cargo::cargo_bin!("earthling"))
        .arg("serve")
        .current_dir(temp.path())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .unwrap();

    let base = format!("http://127.0.0.1:{port}");

    // Wait until the server accepts connections
    let http = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    for _ in 0..50 {
        if http.get(format!("{base}/healthcheck")).send().is_ok() {
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    (ServerGuard(child), base)
}

#[test]
fn test_serve_characters_json() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    let (_guard, base) = spawn_server(&temp, &mock);

    let response = reqwest::blocking::get(format!("{base}/characters")).unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let json: serde_json::Value = response.json().unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["Name"], "Rick Sanchez");
    assert_eq!(json["data"][1]["Name"], "Morty Smith");
}

#[test]
fn test_serve_characters_csv_download() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    let (_guard, base) = spawn_server(&temp, &mock);

    let response = reqwest::blocking::get(format!("{base}/characters/csv")).unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let content_type = response.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/csv"));

    let disposition =
        response.headers().get("Content-Disposition").unwrap().to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=characters_"));
    assert!(disposition.ends_with(".csv"));

    let body = response.text().unwrap();
    assert!(body.starts_with("Name,Origin,Location,Image"));
    assert!(body.contains("Rick Sanchez"));
}

#[test]
fn test_serve_healthcheck_healthy() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    let (_guard, base) = spawn_server(&temp, &mock);

    let response = reqwest::blocking::get(format!("{base}/healthcheck")).unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let json: serde_json::Value = response.json().unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["rick_and_morty_api"]["status_code"], 200);
    assert!(json["timestamp"].is_string());
}

#[test]
fn test_serve_unknown_route_is_404() {
    let temp = TempDir::new().unwrap();
    let mock = roster_mock();
    let (_guard, base) = spawn_server(&temp, &mock);

    let response = reqwest::blocking::get(format!("{base}/nope")).unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let json: serde_json::Value = response.json().unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("/nope"));
}
