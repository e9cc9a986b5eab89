//! Behavioural tests for the `tapgraph` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use rstest::rstest;
use tapgraph_test_support::reference::FIVE_VERTICES_LEVEL_8_TEXT;
use tempfile::TempDir;

fn tapgraph(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = match Command::new(env!("CARGO_BIN_EXE_tapgraph"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TAPGRAPH_LOG_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(error) => panic!("failed to spawn tapgraph: {error}"),
    };
    if let Some(mut input) = child.stdin.take() {
        if let Err(error) = input.write_all(stdin.as_bytes()) {
            panic!("failed to write stdin: {error}");
        }
    }
    match child.wait_with_output() {
        Ok(output) => output,
        Err(error) => panic!("failed to wait for tapgraph: {error}"),
    }
}

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

#[rstest]
fn writes_default_file_in_working_directory() {
    let dir = temp_dir();
    let output = tapgraph(
        dir.path(),
        &["generate", "--vertices", "5", "--probability-level", "8"],
        "",
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read_to_string(dir.path().join("adjacency_list.txt"))
        .unwrap_or_else(|err| panic!("adjacency list must exist: {err}"));
    assert_eq!(written, FIVE_VERTICES_LEVEL_8_TEXT);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pairs: 10"));
    assert!(stdout.contains("edges: 7"));
}

#[rstest]
fn prompts_on_stdin_when_parameters_are_missing() {
    let dir = temp_dir();
    let output = tapgraph(dir.path(), &["generate"], "3\n16\n8\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Enter edge probability level").count(), 2);
    let written = fs::read_to_string(dir.path().join("adjacency_list.txt"))
        .unwrap_or_else(|err| panic!("adjacency list must exist: {err}"));
    assert_eq!(written, "0, 1, 1\n0, 2, 0\n1, 2, 0\n");
}

#[rstest]
#[case::level(&["generate", "--vertices", "3", "--probability-level", "0"], "TAPGRAPH_INVALID_PROBABILITY_LEVEL")]
#[case::seed(&["generate", "--vertices", "3", "--probability-level", "8", "--seed", "0"], "TAPGRAPH_INVALID_SEED")]
fn rejected_parameters_fail_with_code(#[case] args: &[&str], #[case] code: &str) {
    let dir = temp_dir();
    let output = tapgraph(dir.path(), args, "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(code), "stderr: {stderr}");
    assert!(!dir.path().join("adjacency_list.txt").exists());
}

#[rstest]
fn bits_prints_binary_rendering() {
    let dir = temp_dir();
    let output = tapgraph(dir.path(), &["bits", "0xb16b00b5", "--steps", "1"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1011 0001 0110 1011 0000 0000 1011 0101  0xb16b00b5  sample 5",
            "0101 1000 1011 0101 1000 0000 0101 1010  0x58b5805a  sample 10",
        ]
    );
}
