use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("README.md"), "# Test Project\nThis is a test project.").unwrap();
    fs::write(root.join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
    fs::write(root.join("src/lib.go"), "package src\n").unwrap();
    fs::write(root.join("docs/guide.md"), "# User Guide\n").unwrap();
    fs::write(root.join("docs/draft.tmp"), "Draft document").unwrap();
    fs::write(root.join("binary.bin"), [0u8, 1, 2, 3]).unwrap();
    tmp
}

fn dirprompt() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dirprompt"))
}

#[test]
fn test_include_files_flag() {
    let tmp = setup_project();
    dirprompt()
        .arg("--dir")
        .arg(tmp.path())
        .args(["--include-files", "*.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File: README.md"))
        .stdout(predicate::str::contains("File: docs/guide.md"))
        .stdout(predicate::str::contains("File: main.go").not());
}

#[test]
fn test_positional_root_and_default_include_all() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Directory Structure:\n\n└── ./\n"))
        .stdout(predicate::str::contains("File: src/lib.go"))
        .stdout(predicate::str::contains("File: docs/draft.tmp"))
        .stderr(predicate::str::contains(
            "Warning: Skipping binary file: binary.bin",
        ));
}

#[test]
fn test_comma_separated_patterns() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .args(["--include-files", "*.md, *.tmp", "--exclude-files", "docs/*.tmp,README.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File: docs/guide.md"))
        .stdout(predicate::str::contains("File: README.md").not())
        .stdout(predicate::str::contains("draft.tmp").not());
}

#[test]
fn test_output_file_and_token_estimate() {
    let tmp = setup_project();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("prompt.txt");
    dirprompt()
        .arg(tmp.path())
        .arg("-o")
        .arg(&out_path)
        .arg("--estimate-tokens")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_match(r"\nEstimated tokens: \d+\n$").unwrap());
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("File: main.go"));
}

#[test]
fn test_no_matches_exits_zero() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .args(["--include-files", "*.rs"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No text files found or all matched files were binary.",
        ));
}

#[test]
fn test_missing_root_fails() {
    dirprompt()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: A root directory is required"));
}

#[test]
fn test_invalid_pattern_fails() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .args(["--include-files", "[invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid include pattern '[invalid'"));
}

#[test]
fn test_nonexistent_root_fails() {
    let tmp = TempDir::new().unwrap();
    dirprompt()
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Walk error"));
}

#[test]
fn test_blank_include_list_matches_nothing() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .args(["--include-files", " , "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No text files found or all matched files were binary.",
        ));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_output_fails() {
    let tmp = setup_project();
    dirprompt()
        .arg(tmp.path())
        .args(["-o", "/dev/full"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to"));
}
