use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cssls() -> Command {
    Command::cargo_bin("cssls").expect("binary built")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn check_clean_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "ok.css", "a { color: red; }\n");
    cssls().arg("check").arg(&file).assert().success().stdout("");
}

#[test]
fn check_reports_warnings_without_failing() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "warn.css", "body {\n  colo: red;\n}\n");
    cssls()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("warn.css:2:3: warning: unknown property 'colo'"));
}

#[test]
fn check_deny_warnings_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "warn.css", "a { colo: red; }\n");
    cssls().args(["check", "--deny-warnings"]).arg(&file).assert().code(1);
}

#[test]
fn check_syntax_error_fails() {
    let dir = TempDir::new().unwrap();
    let good = write_file(dir.path(), "good.css", "a { color: red; }\n");
    let bad = write_file(dir.path(), "bad.css", "a { color: red; }\n}\n");
    cssls()
        .arg("check")
        .arg(&good)
        .arg(&bad)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad.css:2:1: error: unexpected '}'"));
}

#[test]
fn check_missing_file_is_usage_error() {
    let dir = TempDir::new().unwrap();
    cssls()
        .arg("check")
        .arg(dir.path().join("missing.css"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cssls().arg("lint").assert().code(2);
}

#[test]
fn format_prints_to_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.css", ".foo{color:red;background:blue;}");
    cssls()
        .arg("format")
        .arg(&file)
        .assert()
        .success()
        .stdout(".foo {\n  color: red;\n  background: blue;\n}\n");
}

#[test]
fn format_respects_mode_and_indent_flags() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.css", ".foo{color:red;background:blue;}");
    cssls()
        .args(["format", "--mode", "compact"])
        .arg(&file)
        .assert()
        .success()
        .stdout(".foo { color: red; background: blue; }\n");
    cssls()
        .args(["format", "--use-tabs"])
        .arg(&file)
        .assert()
        .success()
        .stdout(".foo {\n\tcolor: red;\n\tbackground: blue;\n}\n");
}

#[test]
fn format_write_then_check() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.css", "a{color:red}");
    cssls()
        .args(["format", "--check"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not formatted"));

    cssls().args(["format", "--write"]).arg(&file).assert().success().stdout("");
    assert_eq!(fs::read_to_string(&file).unwrap(), "a {\n  color: red;\n}\n");

    cssls().args(["format", "--check"]).arg(&file).assert().success();
}

#[test]
fn colors_lists_presentations() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "c.css", ".foo { color: rgb(255, 0, 0); }\n");
    cssls()
        .arg("colors")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:15\trgb(255, 0, 0)\t#ff0000\t"));
}

#[test]
fn colors_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "c.css", "a { color: #00ff0080; }\n");
    let output = cssls().args(["colors", "--json"]).arg(&file).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["span"]["start"], 11);
    assert_eq!(entries[0]["range"]["start"]["character"], 11);
    assert_eq!(entries[0]["color"]["green"], 1.0);
    assert_eq!(entries[0]["presentations"][0], "#00ff0080");
}
