// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution request: one immutable description of a script run

use crate::policy::{PathNamespace, RetryPolicy, SourceMode};
use std::path::PathBuf;

/// Marker that prefixes host output commands (`##vso[task.setvariable ...]`).
///
/// Inline scripts containing it are never echoed, so the host does not act on
/// the command twice.
pub const OUTPUT_COMMAND_MARKER: &str = "##VSO[";

/// Default interpreter when none is configured.
pub const DEFAULT_INTERPRETER: &str = "bash";

/// Where the script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Literal script text, written verbatim.
    Inline { text: String },
    /// Existing script file, invoked with an argument string.
    File { path: PathBuf, arguments: String },
}

impl ScriptSource {
    pub fn inline(text: impl Into<String>) -> Self {
        ScriptSource::Inline { text: text.into() }
    }

    pub fn file(path: impl Into<PathBuf>, arguments: impl Into<String>) -> Self {
        ScriptSource::File { path: path.into(), arguments: arguments.into() }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ScriptSource::File { .. })
    }

    /// Whether inline text should be echoed before it runs.
    ///
    /// Only single-line scripts without an output-command marker are echoed.
    /// File targets are never echoed (the formatted command is shown instead).
    pub fn should_echo(&self) -> bool {
        match self {
            ScriptSource::Inline { text } => {
                !text.contains('\n') && !text.to_uppercase().contains(OUTPUT_COMMAND_MARKER)
            }
            ScriptSource::File { .. } => false,
        }
    }
}

/// Immutable description of one run: script, interpreter, and policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub source: ScriptSource,
    /// Interpreter name, resolved to an executable path by the host.
    pub interpreter: String,
    /// Arguments placed before the script path (e.g. `--noprofile`).
    pub interpreter_args: Vec<String>,
    pub working_directory: PathBuf,
    /// Treat any stderr output as a failed attempt.
    pub fail_on_stderr: bool,
    pub retry: RetryPolicy,
    /// Extension appended to the materialized file name.
    pub extension: Option<String>,
    pub source_mode: SourceMode,
    pub path_namespace: PathNamespace,
}

impl ExecutionRequest {
    /// Request with default policies: `bash`, one attempt, no stderr failure.
    pub fn new(source: ScriptSource, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            source,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            interpreter_args: Vec::new(),
            working_directory: working_directory.into(),
            fail_on_stderr: false,
            retry: RetryPolicy::once(),
            extension: None,
            source_mode: SourceMode::default(),
            path_namespace: PathNamespace::default(),
        }
    }

    pub fn inline(text: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self::new(ScriptSource::inline(text), working_directory)
    }

    pub fn file(
        path: impl Into<PathBuf>,
        arguments: impl Into<String>,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self::new(ScriptSource::file(path, arguments), working_directory)
    }

    crate::setters! {
        into {
            interpreter: String,
            working_directory: PathBuf,
        }
        set {
            interpreter_args: Vec<String>,
            fail_on_stderr: bool,
            retry: RetryPolicy,
            source_mode: SourceMode,
            path_namespace: PathNamespace,
        }
        option {
            extension: String,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
