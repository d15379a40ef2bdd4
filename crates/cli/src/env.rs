// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Log filter directives for `tracing-subscriber`.
pub const LOG_VAR: &str = "RR_LOG";

/// Filter used when `RR_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the scratch directory: `--scratch-dir` > `RR_SCRATCH_DIR` >
/// `AGENT_TEMPDIRECTORY` > the OS temp dir.
pub fn scratch_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| non_empty("RR_SCRATCH_DIR").map(PathBuf::from))
        .or_else(|| non_empty("AGENT_TEMPDIRECTORY").map(PathBuf::from))
        .unwrap_or_else(std::env::temp_dir)
}

/// Whether `rr bash` should source file targets instead of executing them.
pub fn bash_source_scripts() -> bool {
    non_empty("RR_BASH_SOURCE_SCRIPTS").is_some()
}

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
