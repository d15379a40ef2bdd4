// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter lookup on `PATH`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhichError {
    #[error("interpreter '{0}' not found on PATH")]
    NotFound(String),
    #[error("interpreter path '{}' is not a file", .0.display())]
    NotAFile(PathBuf),
}

/// Resolve an interpreter name against the process `PATH`.
pub fn resolve(name: &str) -> Result<PathBuf, WhichError> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    resolve_in(name, &path_var)
}

/// Resolve `name` against an explicit `PATH` value.
///
/// Names containing a separator are treated as paths and only checked for
/// existence.
pub fn resolve_in(name: &str, path_var: &OsStr) -> Result<PathBuf, WhichError> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return if candidate.is_file() {
            Ok(candidate.to_path_buf())
        } else {
            Err(WhichError::NotAFile(candidate.to_path_buf()))
        };
    }

    for dir in std::env::split_paths(path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for file_name in candidate_names(name) {
            let path = dir.join(&file_name);
            if is_runnable(&path) {
                tracing::debug!(interpreter = name, path = %path.display(), "resolved interpreter");
                return Ok(path);
            }
        }
    }
    Err(WhichError::NotFound(name.to_string()))
}

#[cfg(unix)]
fn candidate_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(not(unix))]
fn candidate_names(name: &str) -> Vec<String> {
    if Path::new(name).extension().is_some() {
        return vec![name.to_string()];
    }
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let mut names = vec![name.to_string()];
    names.extend(exts.split(';').filter(|e| !e.is_empty()).map(|ext| format!("{name}{ext}")));
    names
}

#[cfg(unix)]
fn is_runnable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_runnable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "which_tests.rs"]
mod tests;
