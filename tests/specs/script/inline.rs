//! Inline script specs
//!
//! Verify `rr script --inline` materializes, echoes, and classifies attempts.

use crate::prelude::*;

#[test]
fn inline_script_output_is_streamed() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "echo hello-from-rr", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("Generating script.")
        .stdout_has("Starting Command Output")
        .stdout_has("hello-from-rr")
        .stdout_has("Task succeeded after 1 attempt");
}

/// A one-line script is echoed once, then its own output follows.
#[test]
fn single_line_script_is_echoed_once() {
    let temp = Project::empty();
    let run = temp
        .rr()
        .args(&["script", "--inline", "echo echo-marker", "--cwd", &temp.cwd()])
        .passes();

    assert_eq!(run.stdout_count("Script contents:"), 1);
    // Once in the echo, once from the script itself.
    assert_eq!(run.stdout_count("echo-marker"), 2);
}

#[test]
fn multi_line_script_is_not_echoed() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "echo a\necho b", "--cwd", &temp.cwd()])
        .passes()
        .stdout_eq(concat!(
            "Generating script.\n",
            "========================== Starting Command Output ===========================\n",
            "a\n",
            "b\n",
            "Task succeeded after 1 attempt\n",
        ));
}

#[test]
fn output_command_script_is_not_echoed() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "echo '##vso[task.setvariable variable=x]1'", "--cwd", &temp.cwd()])
        .passes()
        .stdout_lacks("Script contents:");
}

#[test]
fn script_runs_in_the_requested_directory() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "echo here > marker.txt", "--cwd", &temp.cwd()])
        .passes();
    assert_eq!(temp.read("marker.txt"), "here\n");
}

#[test]
fn one_script_file_is_left_in_the_scratch_dir() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "exit 1", "--retries", "2", "--extension", "sh", "--cwd", &temp.cwd()])
        .code(1);

    let files = temp.scratch_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().and_then(|e| e.to_str()), Some("sh"));
    assert_eq!(std::fs::read_to_string(&files[0]).unwrap(), "exit 1");
}

#[test]
fn stderr_fails_the_run_only_when_enabled() {
    let temp = Project::empty();
    let script = "echo problem >&2";

    temp.rr().args(&["script", "--inline", script, "--cwd", &temp.cwd()]).passes();

    temp.rr()
        .args(&["script", "--inline", script, "--fail-on-stderr", "--cwd", &temp.cwd()])
        .code(1)
        .stdout_has("Attempt 1 wrote to stderr:")
        .stdout_has("problem");
}

#[test]
fn json_summary_is_the_last_line() {
    let temp = Project::empty();
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--inline", "exit 3", "--cwd", &temp.cwd()])
        .code(1);

    let summary = run.summary();
    assert_eq!(summary["status"], "failed");
    assert_eq!(summary["attempts"], 1);
    assert_eq!(summary["exit_code"], 3);
    assert!(summary["error"].is_null());
}

#[test]
fn missing_scratch_dir_is_a_setup_failure() {
    let temp = Project::empty();
    let missing = temp.path().join("no-scratch");
    temp.rr()
        .args(&["--scratch-dir", missing.to_str().unwrap(), "script", "--inline", "true", "--cwd", &temp.cwd()])
        .code(2)
        .stdout_has("scratch directory");
}

#[test]
fn missing_interpreter_is_a_setup_failure() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", "true", "--interpreter", "rr-no-such-shell", "--cwd", &temp.cwd()])
        .code(2)
        .stdout_has("Task failed: interpreter 'rr-no-such-shell' not found on PATH");
}

#[test]
fn missing_interpreter_still_prints_a_json_summary() {
    let temp = Project::empty();
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--inline", "true", "--interpreter", "rr-no-such-shell", "--cwd", &temp.cwd()])
        .code(2);

    let summary = run.summary();
    assert_eq!(summary["status"], "failed");
    assert_eq!(summary["attempts"], 0);
    assert!(summary["exit_code"].is_null());
    assert_eq!(summary["error"], "interpreter 'rr-no-such-shell' not found on PATH");
}

#[test]
fn missing_working_directory_prints_a_json_summary() {
    let temp = Project::empty();
    let missing = temp.path().join("gone");
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--inline", "true", "--cwd", missing.to_str().unwrap()])
        .code(2);

    let summary = run.summary();
    assert_eq!(summary["status"], "failed");
    assert_eq!(summary["attempts"], 0);
    assert!(summary["error"].as_str().unwrap().contains("does not exist"));
}
