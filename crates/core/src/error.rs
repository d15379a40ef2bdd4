// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Setup errors: failures that end a run before any attempt executes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a run.
///
/// None of these are retried; the run is reported as failed with zero attempts.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Neither inline text nor a file reference was supplied.
    #[error("invalid target: provide either an inline script or a file path")]
    InvalidTarget,

    /// The file target does not exist or is not a regular file.
    #[error("invalid file path '{}': not a file", path.display())]
    InvalidFilePath { path: PathBuf },

    /// The file target is not executable and strict mode is on.
    #[error(
        "script '{}' is not executable (mode {mode:o}); set the execute bit or allow sourcing",
        path.display()
    )]
    MissingExecutableBit { path: PathBuf, mode: u32 },

    /// The scratch directory is missing or not a directory.
    #[error("scratch directory '{}' does not exist or is not a directory", path.display())]
    ScratchDir { path: PathBuf },

    /// The materialized script could not be written.
    #[error("failed to write script '{}': {source}", path.display())]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path probe failed, exited non-zero, wrote to stderr, or printed nothing.
    #[error("failed to translate path '{}': {reason}", path.display())]
    PathTranslation { path: PathBuf, reason: String },

    /// The interpreter (or a probe) could not be started.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    /// Path associated with this error, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SetupError::InvalidFilePath { path }
            | SetupError::MissingExecutableBit { path, .. }
            | SetupError::ScratchDir { path }
            | SetupError::ScriptWrite { path, .. }
            | SetupError::PathTranslation { path, .. } => Some(path),
            SetupError::InvalidTarget | SetupError::Spawn { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
