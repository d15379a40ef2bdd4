// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress events published while a request runs.
//!
//! Events carry structured fields only; turning them into text is the host's
//! concern.

use crate::attempt::StderrSample;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Progress {
    /// Script text is being resolved and written.
    GeneratingScript,
    /// Invocation line generated for a file target.
    FormattedCommand { command: String },
    /// Echo of a one-line inline script.
    ScriptContents { text: String },
    /// File target lacks the execute bit and will be sourced.
    SourcingNonExecutable { path: PathBuf },
    /// Interpreter is about to start; child output follows.
    StartingOutput,
    /// An attempt exited with a non-zero code.
    ExitCode { attempt: u32, code: i32 },
    /// An attempt wrote to stderr while stderr failure was enabled.
    StderrObserved { attempt: u32, sample: StderrSample },
    /// An attempt failed and another one will run.
    AttemptFailed { attempt: u32 },
    /// Waiting before the next attempt.
    Waiting { delay_secs: u64 },
}

impl Progress {
    /// Short event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Progress::GeneratingScript => "generating_script",
            Progress::FormattedCommand { .. } => "formatted_command",
            Progress::ScriptContents { .. } => "script_contents",
            Progress::SourcingNonExecutable { .. } => "sourcing_non_executable",
            Progress::StartingOutput => "starting_output",
            Progress::ExitCode { .. } => "exit_code",
            Progress::StderrObserved { .. } => "stderr_observed",
            Progress::AttemptFailed { .. } => "attempt_failed",
            Progress::Waiting { .. } => "waiting",
        }
    }
}
