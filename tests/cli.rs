//! Runs the built binary to check configuration gating and exit status.

mod common;

use common::{module_xml, stats_xml, STATS_PATH};
use std::path::Path;
use std::process::{Command, Output};

fn l10n_workflow(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_l10n-workflow"))
        .args(args)
        .env_remove("L10N_WORKFLOW_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run l10n-workflow")
}

fn write_config(dir: &Path, contents: &str) -> String {
    let path = dir.join("config.yaml");
    std::fs::write(&path, contents).expect("write config");
    path.display().to_string()
}

#[test]
fn missing_config_file_exits_non_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("config.yaml").display().to_string();

    let output = l10n_workflow(&["--config", &missing, "workflow:full"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not configured"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn unset_language_exits_non_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(dir.path(), "release_set: gnome-3-12\n");

    let output = l10n_workflow(&["--config", &config, "modules:pending"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("language"), "{stderr}");
}

#[test]
fn pending_json_uses_command_line_overrides() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", STATS_PATH)
        .with_status(200)
        .with_body(stats_xml(&[&[
            module_xml("gedit", "gnome-3-12", 10, 5, 0),
            module_xml("totem", "master", 10, 1, 1),
        ]]))
        .create();

    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(
        dir.path(),
        &format!(
            "release_set: gnome-3-10\nlanguage: gl\nservice_url: {}\n",
            server.url()
        ),
    );

    let output = l10n_workflow(&[
        "--config",
        &config,
        "modules:pending",
        "-r",
        "gnome-3-12",
        "-l",
        "es",
        "--json",
    ]);

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    mock.assert();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let names: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert_eq!(names, ["totem", "gedit"]);
}

#[test]
fn invalid_release_set_is_reported_by_name() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/languages/es/no-such-set/xml")
        .with_status(404)
        .create();

    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_config(
        dir.path(),
        &format!("language: es\nservice_url: {}\n", server.url()),
    );

    let output = l10n_workflow(&["--config", &config, "workflow:full", "-r", "no-such-set"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("release set 'no-such-set' or language 'es' not valid"),
        "{stderr}"
    );
}
