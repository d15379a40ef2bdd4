//! File target specs
//!
//! Verify how `rr script --file` invokes executable and non-executable files.

use crate::prelude::*;

const SCRIPT: &str = "echo \"args: $*\"\n";

#[test]
fn executable_file_runs_with_arguments() {
    let temp = Project::empty();
    let file = temp.file_with_mode("scripts/run.sh", SCRIPT, 0o755);
    temp.rr()
        .args(&["script", "--file", file.to_str().unwrap(), "--args", "one two", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("Formatted command: bash '")
        .stdout_has("args: one two");
}

#[test]
fn paths_with_quotes_are_escaped() {
    let temp = Project::empty();
    let file = temp.file_with_mode("it's here/run.sh", SCRIPT, 0o755);
    temp.rr()
        .args(&["script", "--file", file.to_str().unwrap(), "--args", "ok", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("args: ok");
}

/// Strict mode rejects the file before anything runs.
#[test]
fn strict_mode_rejects_non_executable_file() {
    let temp = Project::empty();
    let file = temp.file_with_mode("run.sh", "echo should-not-run\n", 0o644);
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--file", file.to_str().unwrap(), "--retries", "3", "--delay", "5", "--cwd", &temp.cwd()])
        .code(2)
        .stdout_lacks("should-not-run")
        .stdout_lacks("Starting Command Output");

    let summary = run.summary();
    assert_eq!(summary["status"], "failed");
    assert_eq!(summary["attempts"], 0);
    assert!(summary["error"].as_str().unwrap().contains("not executable"));
    assert!(temp.scratch_files().is_empty());
}

#[test]
fn fallback_mode_sources_non_executable_file() {
    let temp = Project::empty();
    let file = temp.file_with_mode("run.sh", SCRIPT, 0o644);
    temp.rr()
        .args(&["script", "--file", file.to_str().unwrap(), "--args", "x", "--source-mode", "fallback", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("is not executable, sourcing it instead")
        .stdout_has("Formatted command: . '")
        .stdout_has("args: x");
}

#[test]
fn missing_file_is_a_setup_failure() {
    let temp = Project::empty();
    let missing = temp.path().join("absent.sh");
    temp.rr()
        .args(&["script", "--file", missing.to_str().unwrap(), "--cwd", &temp.cwd()])
        .code(2)
        .stdout_has("not a file");
}
