//! Tests for layout discovery and layering
//!
//! Priority: environment > kiln.toml > defaults

use kiln_config::{
    resolve, BuildDescriptor, BuildMode, ConfigDiscovery, ConfigError, ProjectLayout, CONFIG_FILE,
};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn discovers_kiln_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
entry = "app/main.js"
port = 3000
open = false
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), CONFIG_FILE);

    let layout = discovery.load().unwrap();
    assert_eq!(layout.root, dir.path());
    assert_eq!(layout.entry, PathBuf::from("app/main.js"));
    assert_eq!(layout.port, 3000);
    assert!(!layout.open);
    // untouched keys keep their defaults
    assert_eq!(layout.template, PathBuf::from("src/index.html"));
    assert_eq!(layout.output_dir, PathBuf::from("dist"));
    assert!(layout.hot);
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "port = 3000\n").unwrap();

    unsafe {
        std::env::set_var("KILN_PORT", "4000");
        std::env::set_var("KILN_OUTPUT_DIR", "public");
    }
    let layout = ConfigDiscovery::new(dir.path()).load();
    unsafe {
        std::env::remove_var("KILN_PORT");
        std::env::remove_var("KILN_OUTPUT_DIR");
    }

    let layout = layout.unwrap();
    assert_eq!(layout.port, 4000);
    assert_eq!(layout.output_dir, PathBuf::from("public"));
}

#[test]
#[serial]
fn output_dir_override_keeps_mode_naming() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "output_dir = \"build\"\n").unwrap();

    let layout = ConfigDiscovery::new(dir.path()).load().unwrap();
    let descriptor = BuildDescriptor::assemble(&resolve(BuildMode::Production), &layout);

    assert_eq!(descriptor.output().path, dir.path().join("build"));
    assert_eq!(descriptor.output().filename, "[name].[contenthash].js");
    assert_eq!(descriptor.devtool(), "source-map");
}

#[test]
#[serial]
fn misspelled_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "prot = 3000\n").unwrap();

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "prot"));
}

#[test]
#[serial]
fn mode_settings_are_not_layout_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "devtool = \"inline-source-map\"\n",
    )
    .unwrap();

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "devtool"));
}

#[test]
#[serial]
fn unrelated_env_vars_are_ignored() {
    let dir = TempDir::new().unwrap();

    unsafe {
        std::env::set_var("KILN_LOG_STYLE", "json");
    }
    let layout = ConfigDiscovery::new(dir.path()).load();
    unsafe {
        std::env::remove_var("KILN_LOG_STYLE");
    }

    assert_eq!(layout.unwrap(), ProjectLayout::defaults(dir.path()));
}

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let layout = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(layout, ProjectLayout::defaults(dir.path()));
}
