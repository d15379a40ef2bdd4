// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rr bash` - single-attempt bash preset

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use rr_core::{ExecutionRequest, NamespacePreset, PathNamespace, ScriptSource, SetupError, SourceMode};

use super::Context;
use crate::env;

const BASH: &str = "bash";
const EXTENSION: &str = "sh";

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["inline", "file"])))]
pub struct BashArgs {
    /// Script text to run
    #[arg(long, value_name = "TEXT")]
    pub inline: Option<String>,

    /// Existing script file to run
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Argument string passed to the file script
    #[arg(long = "args", value_name = "ARGS", default_value = "", allow_hyphen_values = true, requires = "file")]
    pub arguments: String,

    /// Working directory for the script
    #[arg(long, value_name = "DIR")]
    pub cwd: PathBuf,

    /// Treat any stderr output as a failure
    #[arg(long)]
    pub fail_on_stderr: bool,

    /// Start bash with --noprofile
    #[arg(long)]
    pub no_profile: bool,

    /// Start bash with --norc
    #[arg(long)]
    pub no_rc: bool,
}

impl BashArgs {
    /// Build the preset request.
    ///
    /// `force_source` sources file targets unconditionally; otherwise
    /// non-executable files are sourced with a warning.
    pub fn into_request(
        self,
        force_source: bool,
        namespace: PathNamespace,
    ) -> Result<ExecutionRequest, SetupError> {
        let source = match (self.inline, self.file) {
            (Some(text), None) => ScriptSource::inline(text),
            (None, Some(path)) => ScriptSource::file(path, self.arguments),
            _ => return Err(SetupError::InvalidTarget),
        };

        let mut interpreter_args = Vec::new();
        if self.no_profile {
            interpreter_args.push("--noprofile".to_string());
        }
        if self.no_rc {
            interpreter_args.push("--norc".to_string());
        }
        let source_mode = if force_source { SourceMode::Always } else { SourceMode::Fallback };

        Ok(ExecutionRequest::new(source, self.cwd)
            .interpreter(BASH)
            .interpreter_args(interpreter_args)
            .fail_on_stderr(self.fail_on_stderr)
            .extension(EXTENSION)
            .source_mode(source_mode)
            .path_namespace(namespace))
    }
}

/// Windows hosts run bash in its own path namespace.
fn host_namespace() -> PathNamespace {
    if cfg!(windows) {
        NamespacePreset::Bash.into()
    } else {
        PathNamespace::Native
    }
}

pub async fn handle(args: BashArgs, ctx: &Context) -> Result<()> {
    let request = args.into_request(env::bash_source_scripts(), host_namespace())?;
    super::run_request(request, ctx).await
}

#[cfg(test)]
#[path = "bash_tests.rs"]
mod tests;
