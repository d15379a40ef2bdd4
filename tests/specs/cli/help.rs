//! CLI help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("script")
        .stdout_has("bash")
        .stdout_has("task");
}

#[test]
fn script_help_lists_policy_flags() {
    cli()
        .args(&["script", "--help"])
        .passes()
        .stdout_has("--retries")
        .stdout_has("--delay")
        .stdout_has("--fail-on-stderr")
        .stdout_has("--source-mode");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn no_subcommand_is_a_usage_error() {
    cli().code(2).stderr_has("Usage:");
}

#[test]
fn missing_target_is_a_usage_error() {
    cli().args(&["script", "--cwd", "."]).code(2);
}

#[test]
fn unknown_source_mode_is_a_usage_error() {
    cli()
        .args(&["script", "--inline", "true", "--cwd", ".", "--source-mode", "maybe"])
        .code(2)
        .stderr_has("maybe");
}
