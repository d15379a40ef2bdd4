// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML task files.
//!
//! ```toml
//! interpreter = "bash"
//! working_directory = "/src/app"
//! fail_on_stderr = true
//! extension = "sh"
//! source_mode = "strict"
//! path_namespace = "native"
//!
//! [script]
//! file = "ci/deploy.sh"
//! arguments = "--env staging"
//!
//! [retry]
//! retries = 2
//! delay_secs = 10
//! ```

use crate::error::SetupError;
use crate::policy::{NamespacePreset, RetryPolicy, SourceMode};
use crate::request::{ExecutionRequest, ScriptSource, DEFAULT_INTERPRETER};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskFileError {
    #[error("failed to read task file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid task file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// `[script]` table: exactly one of `inline` or `file`.
///
/// `arguments` only applies to a `file` target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptTable {
    #[serde(default)]
    pub inline: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub arguments: Option<String>,
}

impl ScriptTable {
    /// Resolve into a source, joining a relative file path onto `base_dir`.
    pub fn into_source(self, base_dir: &Path) -> Result<ScriptSource, SetupError> {
        match (self.inline, self.file, self.arguments) {
            (Some(text), None, None) => Ok(ScriptSource::inline(text)),
            (None, Some(path), arguments) => {
                Ok(ScriptSource::file(base_dir.join(path), arguments.unwrap_or_default()))
            }
            _ => Err(SetupError::InvalidTarget),
        }
    }
}

/// On-disk form of an [`ExecutionRequest`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
    #[serde(default)]
    pub script: Option<ScriptTable>,
    #[serde(default)]
    pub interpreter: Option<String>,
    #[serde(default)]
    pub interpreter_args: Vec<String>,
    #[serde(default)]
    pub working_directory: Option<PathBuf>,
    #[serde(default)]
    pub fail_on_stderr: bool,
    #[serde(default)]
    pub retry: RetryPolicy,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub source_mode: SourceMode,
    #[serde(default)]
    pub path_namespace: NamespacePreset,
}

impl TaskFile {
    pub fn parse(content: &str) -> Result<Self, TaskFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, TaskFileError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| TaskFileError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&content)
    }

    /// Convert into a request.
    ///
    /// Relative paths (working directory and file target) resolve against
    /// `base_dir`, normally the directory holding the task file. A missing
    /// working directory defaults to `base_dir` itself.
    pub fn into_request(self, base_dir: &Path) -> Result<ExecutionRequest, TaskFileError> {
        let source = self.script.ok_or(SetupError::InvalidTarget)?.into_source(base_dir)?;
        let working_directory = match self.working_directory {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };

        let mut request = ExecutionRequest::new(source, working_directory)
            .interpreter(self.interpreter.unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()))
            .interpreter_args(self.interpreter_args)
            .fail_on_stderr(self.fail_on_stderr)
            .retry(self.retry)
            .source_mode(self.source_mode)
            .path_namespace(self.path_namespace.into());
        if let Some(ext) = self.extension.filter(|ext| !ext.is_empty()) {
            request = request.extension(ext);
        }
        Ok(request)
    }
}

#[cfg(test)]
#[path = "task_file_tests.rs"]
mod tests;
