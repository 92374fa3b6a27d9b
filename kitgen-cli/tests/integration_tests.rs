//! Integration tests for the kitgen CLI.
//!
//! Tests end-to-end behavior using the built binary in tempfile sandboxes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the kitgen binary (built by cargo)
fn kitgen_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kitgen"))
}

/// Run kitgen with the given args
fn run_kitgen(args: &[&str]) -> Output {
    kitgen_binary()
        .args(args)
        .output()
        .expect("Failed to execute kitgen command")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a locale directory with one record file
fn write_locale_file(src: &Path, locale: &str, name: &str, contents: &str) -> PathBuf {
    let dir = src.join(locale);
    fs::create_dir_all(&dir).expect("Failed to create locale dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write record file");
    path
}

/// Records for the standard "Tools / Basics" scenario: one item, one check
fn tools_records() -> &'static str {
    r#"[
        {"title": "Knife", "body": "Keep it sharp", "category": "Tools",
         "subcategory": "Basics", "difficulty": "beginner"},
        {"text": "Check your knife", "category": "Tools",
         "subcategory": "Basics", "difficulty": "beginner"}
    ]"#
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&contents).expect("Output file is not valid JSON")
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_end_to_end_two_locales_merge() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    let dest = root.path().join("dest");
    write_locale_file(&src, "en", "tools.json", tools_records());
    write_locale_file(&src, "es", "tools.json", tools_records());

    let output = run_kitgen(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // Both locales collapse onto the same slugs: one category, one
    // subcategory, two checks, and a disambiguated second item.
    assert!(dest.join("tools/index").is_file());
    assert!(dest.join("tools/basics/index").is_file());
    assert!(dest.join("tools/basics/checks").is_file());
    assert!(dest.join("tools/basics/knife").is_file());
    assert!(dest.join("tools/basics/knife-0").is_file());

    let checks = read_json(&dest.join("tools/basics/checks"));
    assert_eq!(checks.as_array().unwrap().len(), 2);
    assert_eq!(checks[0]["text"], "Check your knife");

    // Locales are visited in name order, so "en" creates the category and
    // its metadata stays bound to it.
    let index = read_json(&dest.join("tools/index"));
    assert_eq!(index["id"], "tools");
    assert_eq!(index["name"], "Tools");
    assert_eq!(index["locale"], "en");
    assert_eq!(index["order"], 0);

    let item = read_json(&dest.join("tools/basics/knife"));
    assert_eq!(item["title"], "Knife");
    assert_eq!(item["body"], "Keep it sharp");
    assert_eq!(item["order"], 0);
    let second = read_json(&dest.join("tools/basics/knife-0"));
    assert_eq!(second["order"], 1);
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let output = run_kitgen(&[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));

    let output = run_kitgen(&["only-one-arg"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_missing_source_is_fatal_and_writes_nothing() {
    let root = TempDir::new().unwrap();
    let dest = root.path().join("dest");

    let output = run_kitgen(&["/nonexistent/source/dir", dest.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("/nonexistent/source/dir"));
    assert!(!dest.exists());
}

#[test]
fn test_malformed_file_skipped_others_ingested() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    let dest = root.path().join("dest");
    write_locale_file(&src, "en", "good.json", tools_records());
    write_locale_file(&src, "en", "broken.json", "{this is not a record list");
    write_locale_file(
        &src,
        "en",
        "more.json",
        r#"[{"title": "Rope", "category": "Tools", "subcategory": "Basics"}]"#,
    );

    let output = run_kitgen(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // Both well-formed files contributed; the malformed one is absent.
    assert!(dest.join("tools/basics/knife").is_file());
    assert!(dest.join("tools/basics/rope").is_file());
}

#[test]
fn test_strings_json_is_not_ingested() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    let dest = root.path().join("dest");
    write_locale_file(&src, "en", "tools.json", tools_records());
    write_locale_file(&src, "en", "strings.json", "{\"app.title\": \"Kit\"}");

    let output = run_kitgen(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dest.join("tools/index").is_file());
}

#[test]
fn test_rerun_overwrites_existing_output() {
    let root = TempDir::new().unwrap();
    let src = root.path().join("src");
    let dest = root.path().join("dest");
    write_locale_file(&src, "en", "tools.json", tools_records());

    let first = run_kitgen(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
    assert!(first.status.success());
    fs::write(dest.join("tools/index"), "stale contents").unwrap();

    let second = run_kitgen(&[src.to_str().unwrap(), dest.to_str().unwrap()]);
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    let index = read_json(&dest.join("tools/index"));
    assert_eq!(index["id"], "tools");
}
