// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level entry point: materialize once, then run the retry loop.

use crate::delay::TokioDelay;
use crate::environment::Environment;
use crate::materialize::Materializer;
use crate::reporter::Reporter;
use crate::retry::{RetryController, RunReport};
use crate::runner::ProcessRunner;
use crate::translate::translator_for;
use rr_core::{AttemptResult, ExecutionRequest, Progress, SetupError, TaskStatus};
use tokio::io::AsyncWrite;

/// Terminal result of one request.
#[derive(Debug)]
pub struct Outcome {
    pub status: TaskStatus,
    /// Attempts actually run (zero when setup failed).
    pub attempts: u32,
    pub last: Option<AttemptResult>,
    pub error: Option<SetupError>,
}

impl Outcome {
    fn from_report(report: RunReport) -> Self {
        Self {
            status: report.status,
            attempts: report.attempts,
            last: Some(report.last),
            error: None,
        }
    }

    fn setup_failed(error: SetupError) -> Self {
        Self { status: TaskStatus::Failed, attempts: 0, last: None, error: Some(error) }
    }

    /// Exit code of the last attempt, if one ran.
    pub fn exit_code(&self) -> Option<i32> {
        self.last.as_ref().map(|r| r.exit_code)
    }
}

/// Run `request` to a terminal status, streaming child output into `sink`.
///
/// Setup errors never escape; they become a failed outcome with zero attempts.
pub async fn execute<W>(
    request: &ExecutionRequest,
    env: &Environment,
    reporter: &dyn Reporter,
    sink: W,
) -> Outcome
where
    W: AsyncWrite + Unpin + Send,
{
    match run(request, env, reporter, sink).await {
        Ok(report) => Outcome::from_report(report),
        Err(error) => {
            tracing::debug!(%error, "setup failed");
            Outcome::setup_failed(error)
        }
    }
}

async fn run<W>(
    request: &ExecutionRequest,
    env: &Environment,
    reporter: &dyn Reporter,
    sink: W,
) -> Result<RunReport, SetupError>
where
    W: AsyncWrite + Unpin + Send,
{
    let translator = translator_for(request, env);
    let script = Materializer::new(&env.scratch_dir, translator.as_ref(), env.executable.as_ref())
        .materialize(request, reporter)
        .await?;

    reporter.report(Progress::StartingOutput);
    let runner = ProcessRunner::new(env, request, sink);
    let mut controller =
        RetryController::new(runner, TokioDelay, request.retry, request.fail_on_stderr);
    controller.run(&script, reporter).await
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;
