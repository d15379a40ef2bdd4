// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod bash;
pub mod script;
pub mod task;

use std::path::PathBuf;

use anyhow::Result;
use rr_core::ExecutionRequest;
use rr_engine::Environment;

use crate::env;
use crate::exit_error::ExitError;
use crate::output::{print_summary, OutputFormat, Summary};
use crate::render::ConsoleReporter;
use crate::which;

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub scratch_dir: Option<PathBuf>,
    pub output: OutputFormat,
}

/// Resolve the host environment, run `request`, and print the summary.
///
/// Setup failures exit 2 and a failed run exits 1.
pub async fn run_request(request: ExecutionRequest, ctx: &Context) -> Result<()> {
    if !request.working_directory.is_dir() {
        return Err(report_setup_failure(
            format!("working directory '{}' does not exist", request.working_directory.display()),
            ctx,
        ));
    }
    let interpreter =
        which::resolve(&request.interpreter).map_err(|e| report_setup_failure(e.to_string(), ctx))?;
    let environment = Environment::new(interpreter, env::scratch_dir(ctx.scratch_dir.clone()));
    tracing::info!(
        interpreter = %environment.interpreter_path.display(),
        scratch_dir = %environment.scratch_dir.display(),
        retries = request.retry.retries,
        "starting run"
    );

    let outcome =
        rr_engine::execute(&request, &environment, &ConsoleReporter, tokio::io::stdout()).await;
    let summary = Summary::from_outcome(&outcome);
    print_summary(&summary, ctx.output)?;

    match (&outcome.error, outcome.status.is_success()) {
        (Some(_), _) => Err(ExitError::setup_reported().into()),
        (None, true) => Ok(()),
        (None, false) => Err(ExitError::failed().into()),
    }
}

/// Print a zero-attempt failed summary for a setup error found before the
/// engine ran, and return the matching exit error.
pub fn report_setup_failure(message: String, ctx: &Context) -> anyhow::Error {
    tracing::debug!(%message, "setup failed");
    if let Err(e) = print_summary(&Summary::setup_failed(message), ctx.output) {
        return e;
    }
    ExitError::setup_reported().into()
}
