//! Integration tests for the splitjoin binary
//!
//! These tests run the built binary end to end:
//! - text from an argument and from stdin
//! - token and mode flags
//! - JSON output and statistics
//! - error handling for invalid tokens

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_splitjoin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_splitjoin"))
        .args(args)
        .env_remove("SPLITJOIN_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute splitjoin")
}

fn run_splitjoin_with_stdin(args: &[&str], stdin_data: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_splitjoin"))
        .args(args)
        .env_remove("SPLITJOIN_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn splitjoin");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait on child")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_argument_with_default_tokens() {
    let output = run_splitjoin(&["a b\nc"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "\"a\",\"b\",\"c\"\n");
}

#[test]
fn test_custom_tokens() {
    let output = run_splitjoin(&["--start", "[", "--separator", "|", "--end", "]", "x y"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "[x|y]\n");
}

#[test]
fn test_whole_lines_from_stdin() {
    let output = run_splitjoin_with_stdin(&["--stdin", "-l"], "first line\n\nsecond line\n");
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "\"first line\",\"second line\"\n");
}

#[test]
fn test_piped_stdin_without_flag() {
    let output = run_splitjoin_with_stdin(&[], "one two");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\"one\",\"two\"\n");
}

#[test]
fn test_empty_stdin() {
    let output = run_splitjoin_with_stdin(&["--stdin"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\"\"\n");
}

#[test]
fn test_stats_go_to_stderr() {
    let output = run_splitjoin(&["--stats", "a b\nc"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\"a\",\"b\",\"c\"\n");
    assert!(stderr_of(&output)
        .contains("Исходное количество слов: 3 | Итоговое количество символов: 11."));
}

#[test]
fn test_quiet_suppresses_stats() {
    let output = run_splitjoin(&["--stats", "--quiet", "a"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_json_output() {
    let output = run_splitjoin(&["--format", "json", "-l", "a b\nc"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["output"], "\"a b\",\"c\"");
    assert_eq!(value["word_count"], 3);
    assert_eq!(value["character_count"], 9);
}

#[test]
fn test_unit_separator_splits_words() {
    let output = run_splitjoin(&["--stats", "a\u{1f}b"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\"a\",\"b\"\n");
    assert!(stderr_of(&output).contains("Исходное количество слов: 2"));
}

#[test]
fn test_whitespace_token_is_rejected() {
    let output = run_splitjoin(&["--separator", "; ;", "a b"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("separator must not contain whitespace"), "stderr: {}", stderr);
    assert!(stderr.contains("splitjoin --help"));
}

#[test]
fn test_closed_stdin_reads_as_empty_input() {
    // stdin is /dev/null, not a terminal, so it is read as empty input
    let output = run_splitjoin(&[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\"\"\n");
}
