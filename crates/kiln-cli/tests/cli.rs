//! End-to-end tests for the kiln binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// kiln with a clean mode/layout environment, rooted at `root`.
fn kiln(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("kiln");
    cmd.current_dir(root)
        .env_remove("NODE_ENV")
        .env_remove("KILN_PORT")
        .env_remove("KILN_OUTPUT_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("img")).unwrap();
    fs::write(src.join("index.js"), "import './main.scss'\n").unwrap();
    fs::write(src.join("index.html"), "<!doctype html>\n").unwrap();
    fs::write(src.join("main.scss"), "body { color: red; }\n").unwrap();
    fs::write(src.join("img/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    temp
}

fn print_json(cmd: &mut Command, extra: &[&str]) -> Value {
    let output = cmd
        .arg("print")
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("print emits JSON")
}

#[test]
fn print_without_node_env_is_production() {
    let temp = project();
    let value = print_json(&mut kiln(temp.path()), &[]);

    assert_eq!(value["mode"], "production");
    assert_eq!(value["output"]["filename"], "[name].[contenthash].js");
    assert_eq!(value["devtool"], "source-map");
    let plugins: Vec<_> = value["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["plugin"].as_str().unwrap())
        .collect();
    assert!(plugins.contains(&"mini-css-extract-plugin"));
}

#[test]
fn print_with_node_env_development() {
    let temp = project();
    let value = print_json(kiln(temp.path()).env("NODE_ENV", "development"), &[]);

    assert_eq!(value["mode"], "development");
    assert_eq!(value["output"]["filename"], "[name].js");
    assert_eq!(value["devtool"], "eval-source-map");
    assert_eq!(value["module"]["rules"][1]["use"][0]["loader"], "style-loader");
}

#[test]
fn print_with_other_node_env_is_production() {
    let temp = project();
    let value = print_json(kiln(temp.path()).env("NODE_ENV", "staging"), &[]);
    assert_eq!(value["mode"], "production");
}

#[test]
fn mode_flag_replaces_node_env() {
    let temp = project();
    let value = print_json(
        kiln(temp.path()).env("NODE_ENV", "development"),
        &["--mode", "production"],
    );
    assert_eq!(value["mode"], "production");
}

#[test]
fn print_compact_is_single_line() {
    let temp = project();
    kiln(temp.path())
        .args(["print", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\{.*\}\n$").unwrap());
}

#[test]
fn print_honors_kiln_toml() {
    let temp = project();
    fs::write(temp.path().join("kiln.toml"), "port = 8080\n").unwrap();

    let value = print_json(&mut kiln(temp.path()), &[]);
    assert_eq!(value["devServer"]["port"], 8080);
}

#[test]
fn print_rejects_misspelled_key() {
    let temp = project();
    fs::write(temp.path().join("kiln.toml"), "prot = 8080\n").unwrap();

    kiln(temp.path())
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("prot"));
}

#[test]
fn check_passes_for_complete_project() {
    let temp = project();
    kiln(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed"));
}

#[test]
fn check_fails_without_entry() {
    let temp = project();
    fs::remove_file(temp.path().join("src/index.js")).unwrap();

    kiln(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point not found"));
}

#[test]
fn name_puts_scripts_in_hashed_entry_chunk() {
    let temp = project();
    kiln(temp.path())
        .args(["name", "src/index.js"])
        .assert()
        .success()
        .stdout("main.[contenthash].js\n");
}

#[test]
fn name_is_stable_in_development() {
    let temp = project();
    kiln(temp.path())
        .env("NODE_ENV", "development")
        .args(["name", "src/index.js"])
        .assert()
        .success()
        .stdout("main.js\n");
}

#[test]
fn name_reports_extracted_stylesheet_in_production() {
    let temp = project();
    kiln(temp.path())
        .args(["name", "src/main.scss"])
        .assert()
        .success()
        .stdout("main.css\n");
}

#[test]
fn name_reports_injected_styles_in_development() {
    let temp = project();
    kiln(temp.path())
        .env("NODE_ENV", "development")
        .args(["name", "src/main.scss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no file"));
}

#[test]
fn name_reports_html_plugin_page() {
    let temp = project();
    for mode in ["development", "production"] {
        kiln(temp.path())
            .args(["name", "src/index.html", "--mode", mode])
            .assert()
            .success()
            .stdout("index.html\n");
    }
}

#[test]
fn name_renders_asset_template() {
    let temp = project();
    kiln(temp.path())
        .args(["name", "src/img/logo.png"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^images/logo-[0-9a-f]{20}\.png\n$").unwrap());
}

#[test]
fn name_rejects_unmatched_file() {
    let temp = project();
    fs::write(temp.path().join("notes.md"), "# notes\n").unwrap();

    kiln(temp.path())
        .args(["name", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rule matches"));
}

#[test]
fn name_reports_missing_file() {
    let temp = project();
    kiln(temp.path())
        .args(["name", "src/missing.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
