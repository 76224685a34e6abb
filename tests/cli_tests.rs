use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;
use termconf::cli::{Cli, execute};

fn run(args: &[&str]) -> (i32, String) {
    let cli = Cli::try_parse_from(std::iter::once("termconf").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let code = execute(&cli, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

#[test]
fn test_show_merges_defaults_and_user_file() {
    let dir = TempDir::new().unwrap();
    let defaults = dir.path().join("defaults.json");
    let user = dir.path().join("settings.json");
    write_json(&defaults, &json!({ "initialRows": 25, "initialCols": 80 }));
    write_json(&user, &json!({ "initialCols": 132, "requestedTheme": "dark" }));

    let (code, out) = run(&[
        "show",
        "--defaults",
        defaults.to_str().unwrap(),
        "--settings",
        user.to_str().unwrap(),
    ]);
    let doc: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(code, 0);
    assert_eq!(doc["initialRows"], 25);
    assert_eq!(doc["initialCols"], 132);
    assert_eq!(doc["requestedTheme"], "dark");
    assert!(doc["schemes"].is_array());
}

#[test]
fn test_globals_prints_only_global_keys() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("settings.json");

    let (code, out) = run(&["globals", "--settings", user.to_str().unwrap()]);
    let doc: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(code, 0);
    assert_eq!(doc.as_object().unwrap().len(), 10);
    assert!(doc.get("profiles").is_none());
}

#[test]
fn test_init_then_validate_is_clean() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("termconf").join("settings.json");
    let path = user.to_str().unwrap();

    let (code, _) = run(&["init", "--settings", path]);
    assert_eq!(code, 0);
    assert!(user.exists());

    let (code, out) = run(&["validate", "--settings", path]);
    assert_eq!(code, 0);
    assert!(out.contains("valid"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("settings.json");
    fs::write(&user, "{}").unwrap();

    let cli = Cli::try_parse_from(["termconf", "init", "--settings", user.to_str().unwrap()])
        .unwrap();
    assert!(execute(&cli, &mut Vec::<u8>::new()).is_err());
    assert_eq!(fs::read_to_string(&user).unwrap(), "{}");

    let (code, _) = run(&["init", "--force", "--settings", user.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_ne!(fs::read_to_string(&user).unwrap(), "{}");
}

#[test]
fn test_validate_reports_missing_default_profile() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("settings.json");
    write_json(
        &user,
        &json!({
            "defaultProfile": "{11111111-1111-1111-1111-111111111111}",
            "profiles": [{ "guid": "{0caa0dad-35be-5f56-a8ff-afceeeaa6101}", "name": "cmd" }]
        }),
    );

    let (code, out) = run(&["validate", "--settings", user.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(out.contains("warning: default profile"));
}

#[test]
fn test_type_error_in_settings_fails_load() {
    let dir = TempDir::new().unwrap();
    let user = dir.path().join("settings.json");
    write_json(&user, &json!({ "copyOnSelect": "sometimes" }));

    let cli = Cli::try_parse_from(["termconf", "show", "--settings", user.to_str().unwrap()])
        .unwrap();
    let err = execute(&cli, &mut Vec::<u8>::new()).unwrap_err();
    assert!(format!("{err:#}").contains("copyOnSelect"));
}
