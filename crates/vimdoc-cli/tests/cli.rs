use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_vimdoc-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_vimdoc_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("vimdoc-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "vimdoc_cli_{}_{}_{}.txt",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn renders_a_fragment_by_default() {
    let input = temp_file("fragment", "*foo*\n");
    let output = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<span class=\"tag_anchor\">"));
    assert!(!stdout.contains("<!DOCTYPE html>"), "expected bare fragment");
}

#[test]
fn standalone_wraps_the_fragment_in_a_page() {
    let input = temp_file("standalone", "*foo*\n");
    let output = Command::new(bin_path())
        .args(["--standalone", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<!DOCTYPE html>"), "expected HTML wrapper");
    assert!(stdout.contains("<style>"), "expected inline CSS");
    assert!(stdout.contains("<pre class=\"vimdoc\">"), "expected pre block");
}

#[test]
fn sanitized_output_keeps_anchors() {
    let input = temp_file("sanitized", "*foo*\n");
    let output = Command::new(bin_path())
        .args(["--sanitized", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("id=\"foo\""), "anchor id survives sanitizing");
}

#[test]
fn builtin_tags_resolve_known_links() {
    let input = temp_file("builtin", "|help|\n");
    let output = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("https://vimhelp.org/"),
        "expected a built-in destination: {stdout}"
    );
}

#[test]
fn no_builtin_falls_back_to_fragments() {
    let input = temp_file("no_builtin", "|help|\n");
    let output = Command::new(bin_path())
        .args(["--no-builtin", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("href=\"#help\""),
        "expected an in-page fragment: {stdout}"
    );
}

#[test]
fn extra_arguments_are_rejected() {
    let output = Command::new(bin_path())
        .args(["one.txt", "two.txt"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_input_file_fails() {
    let output = Command::new(bin_path())
        .arg("does-not-exist.txt")
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
}
