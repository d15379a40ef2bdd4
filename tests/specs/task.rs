//! `rr task` specs
//!
//! Verify TOML task files drive the same runs as the flag forms.

use crate::prelude::*;

#[test]
fn inline_task_runs_with_retries() {
    let temp = Project::empty();
    let task = temp.file(
        "retry.toml",
        r#"
interpreter = "sh"

[script]
inline = "echo x >> runs; exit 1"

[retry]
retries = 1
"#,
    );

    let run = temp.rr().args(&["-o", "json", "task", task.to_str().unwrap()]).code(1);

    assert_eq!(run.summary()["attempts"], 2);
    assert_eq!(temp.read("runs").lines().count(), 2);
}

#[test]
fn file_task_resolves_relative_to_the_task_file() {
    let temp = Project::empty();
    temp.file_with_mode("tasks/scripts/hello.sh", "echo \"hello $1\"\n", 0o755);
    let task = temp.file(
        "tasks/hello.toml",
        r#"
source_mode = "strict"

[script]
file = "scripts/hello.sh"
arguments = "world"
"#,
    );

    temp.rr().args(&["task", task.to_str().unwrap()]).passes().stdout_has("hello world");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = Project::empty();
    let task = temp.file("bad.toml", "retires = 3\n\n[script]\ninline = \"true\"\n");
    temp.rr().args(&["task", task.to_str().unwrap()]).code(2).stderr_has("invalid task file");
}

#[test]
fn task_without_script_is_rejected() {
    let temp = Project::empty();
    let task = temp.file("empty.toml", "fail_on_stderr = true\n");
    temp.rr().args(&["task", task.to_str().unwrap()]).code(2).stdout_has("Task failed: invalid target");
}

#[test]
fn script_table_with_two_targets_is_rejected() {
    let temp = Project::empty();
    let task = temp.file("both.toml", "[script]\ninline = \"echo hi\"\nfile = \"deploy.sh\"\n");
    let run = temp.rr().args(&["-o", "json", "task", task.to_str().unwrap()]).code(2);
    assert_eq!(run.summary()["attempts"], 0);
    assert!(run.summary()["error"].as_str().unwrap().starts_with("invalid target"));
}
