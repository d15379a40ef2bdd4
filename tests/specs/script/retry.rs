//! Retry policy specs

use std::time::{Duration, Instant};

use crate::prelude::*;

/// Script that fails until it has run `n` times.
fn succeed_on(n: u32) -> String {
    format!("echo x >> runs\ncount=$(wc -l < runs)\n[ $count -ge {n} ]\n")
}

#[test]
fn always_failing_script_exhausts_the_budget() {
    let temp = Project::empty();
    let start = Instant::now();
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--inline", "exit 1", "--retries", "2", "--delay", "1", "--cwd", &temp.cwd()])
        .code(1);

    assert!(start.elapsed() >= Duration::from_secs(2), "expected two 1s delays");
    assert_eq!(run.stdout_count("exited with code 1"), 3);
    assert_eq!(run.stdout_count("Waiting 1s"), 2);
    let summary = run.summary();
    assert_eq!(summary["attempts"], 3);
    assert_eq!(summary["status"], "failed");
}

#[test]
fn stops_at_first_success() {
    let temp = Project::empty();
    let run = temp
        .rr()
        .args(&["-o", "json", "script", "--inline", &succeed_on(2), "--retries", "3", "--cwd", &temp.cwd()])
        .passes();

    assert_eq!(run.stdout_count("Waiting"), 1);
    assert_eq!(run.summary()["attempts"], 2);
    assert_eq!(temp.read("runs").lines().count(), 2);
}

#[test]
fn zero_retries_means_one_attempt() {
    let temp = Project::empty();
    temp.rr()
        .args(&["script", "--inline", &succeed_on(2), "--cwd", &temp.cwd()])
        .code(1)
        .stdout_has("Task failed after 1 attempt (exit code 1)")
        .stdout_lacks("Waiting");
    assert_eq!(temp.read("runs").lines().count(), 1);
}
