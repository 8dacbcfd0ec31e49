//! End-to-end runs of the `crucible` binary

use crucible_core::samples::{EXAMPLE, UNFORTUNATE_PATH};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn crucible(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crucible"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_quiet_prints_both_answers() {
    let file = input_file(EXAMPLE.input);
    let output = crucible(&["-q", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "102\n94\n");
}

#[test]
fn test_results_keep_input_order_when_parallel() {
    let first = input_file(UNFORTUNATE_PATH.input);
    let second = input_file(EXAMPLE.input);
    for mode in ["sequential", "input", "part"] {
        let output = crucible(&[
            "-q",
            "-p",
            "2",
            "--parallelize-by",
            mode,
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ]);
        assert!(output.status.success(), "{}", mode);
        assert_eq!(stdout(&output), "71\n94\n", "{}", mode);
    }
}

#[test]
fn test_verify_then_solve() {
    let file = input_file(EXAMPLE.input);
    let output = crucible(&["--verify", "-p", "1", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Samples verified."));
    assert!(out.contains("Part 1: 102"));
    assert!(out.contains("--- Summary ---"));
}

#[test]
fn test_malformed_input_fails() {
    let file = input_file("123\n4x6\n");
    let output = crucible(&["-q", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("not a digit"), "{}", err);
}

#[test]
fn test_no_path_fails() {
    let file = input_file("11\n11\n");
    let output = crucible(&["-q", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "2\n");
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("No path found"), "{}", err);
    assert!(err.contains("1 part(s) failed"), "{}", err);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = crucible(&[missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Failed to read input"), "{}", err);
}
