// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rr script` - run an inline or file script with retries

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use rr_core::request::DEFAULT_INTERPRETER;
use rr_core::{ExecutionRequest, NamespacePreset, RetryPolicy, ScriptSource, SetupError, SourceMode};

use super::Context;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["inline", "file"])))]
pub struct ScriptArgs {
    /// Script text to run
    #[arg(long, value_name = "TEXT")]
    pub inline: Option<String>,

    /// Existing script file to run
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Argument string passed to the file script
    #[arg(long = "args", value_name = "ARGS", default_value = "", allow_hyphen_values = true, requires = "file")]
    pub arguments: String,

    /// Interpreter name, looked up on PATH
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Argument placed before the script path (repeatable)
    #[arg(long = "interpreter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub interpreter_args: Vec<String>,

    /// Working directory for the script
    #[arg(long, value_name = "DIR")]
    pub cwd: PathBuf,

    /// Treat any stderr output as a failed attempt
    #[arg(long)]
    pub fail_on_stderr: bool,

    /// Additional attempts after the first failure
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Seconds to wait between attempts
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    pub delay: u64,

    /// Extension for the generated script file
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// What to do with a file target that is not executable
    #[arg(long, value_name = "MODE", default_value_t = SourceMode::Strict)]
    pub source_mode: SourceMode,

    /// How paths are translated for the interpreter
    #[arg(long, value_name = "NAMESPACE", default_value_t = NamespacePreset::Native)]
    pub path_namespace: NamespacePreset,
}

impl ScriptArgs {
    pub fn into_request(self) -> Result<ExecutionRequest, SetupError> {
        let source = match (self.inline, self.file) {
            (Some(text), None) => ScriptSource::inline(text),
            (None, Some(path)) => ScriptSource::file(path, self.arguments),
            _ => return Err(SetupError::InvalidTarget),
        };

        let mut request = ExecutionRequest::new(source, self.cwd)
            .interpreter(self.interpreter)
            .interpreter_args(self.interpreter_args)
            .fail_on_stderr(self.fail_on_stderr)
            .retry(RetryPolicy::new(self.retries, self.delay))
            .source_mode(self.source_mode)
            .path_namespace(self.path_namespace.into());
        if let Some(ext) = self.extension.filter(|ext| !ext.is_empty()) {
            request = request.extension(ext);
        }
        Ok(request)
    }
}

pub async fn handle(args: ScriptArgs, ctx: &Context) -> Result<()> {
    let request = args.into_request()?;
    super::run_request(request, ctx).await
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
