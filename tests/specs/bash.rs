//! `rr bash` preset specs

use crate::prelude::*;

const SCRIPT: &str = "echo \"args: $*\"\n";

#[test]
fn inline_script_runs_once() {
    let temp = Project::empty();
    temp.rr()
        .args(&["bash", "--inline", "echo from-bash; exit 4", "--cwd", &temp.cwd()])
        .code(1)
        .stdout_has("from-bash")
        .stdout_has("Task failed after 1 attempt (exit code 4)");

    let files = temp.scratch_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().and_then(|e| e.to_str()), Some("sh"));
}

#[test]
fn non_executable_file_is_sourced_with_a_warning() {
    let temp = Project::empty();
    let file = temp.file_with_mode("run.sh", SCRIPT, 0o644);
    temp.rr()
        .args(&["bash", "--file", file.to_str().unwrap(), "--args", "a b", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("is not executable, sourcing it instead")
        .stdout_has("args: a b");
}

#[test]
fn source_scripts_variable_sources_executable_files() {
    let temp = Project::empty();
    let file = temp.file_with_mode("run.sh", SCRIPT, 0o755);
    temp.rr()
        .env("RR_BASH_SOURCE_SCRIPTS", "1")
        .args(&["bash", "--file", file.to_str().unwrap(), "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("Formatted command: . '")
        .stdout_lacks("sourcing it instead");
}

#[test]
fn startup_flags_reach_bash() {
    let temp = Project::empty();
    temp.rr()
        .args(&["bash", "--inline", "shopt -q login_shell || echo not-login", "--no-profile", "--no-rc", "--cwd", &temp.cwd()])
        .passes()
        .stdout_has("not-login");
}

#[test]
fn stderr_policy_applies() {
    let temp = Project::empty();
    temp.rr()
        .args(&["bash", "--inline", "echo oops >&2", "--fail-on-stderr", "--cwd", &temp.cwd()])
        .code(1)
        .stdout_has("oops");
}
