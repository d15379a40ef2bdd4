// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry controller: runs attempts until one succeeds or the budget is spent.

use crate::delay::Delay;
use crate::materialize::MaterializedScript;
use crate::reporter::Reporter;
use crate::runner::ScriptRunner;
use rr_core::{AttemptResult, Progress, RetryPolicy, SetupError, TaskStatus};

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Attempting,
    RetryPending,
    Succeeded,
    Exhausted,
}

/// What happens after an attempt is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Wait, then run the next attempt.
    Retry,
    /// No more attempts.
    Done(TaskStatus),
}

/// Attempt counter and phase, free of any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    budget: u32,
    phase: Phase,
}

impl RetryState {
    pub fn new(policy: &RetryPolicy) -> Self {
        Self { attempt: 1, budget: policy.budget(), phase: Phase::Attempting }
    }

    /// Current 1-based attempt number.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record the outcome of the current attempt.
    pub fn record(&mut self, failed: bool) -> Transition {
        if !failed {
            self.phase = Phase::Succeeded;
            return Transition::Done(TaskStatus::Succeeded);
        }
        if self.attempt >= self.budget {
            self.phase = Phase::Exhausted;
            return Transition::Done(TaskStatus::Failed);
        }
        self.phase = Phase::RetryPending;
        Transition::Retry
    }

    /// Move from a pending retry to the next attempt.
    pub fn advance(&mut self) {
        if self.phase == Phase::RetryPending {
            self.attempt += 1;
            self.phase = Phase::Attempting;
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Succeeded | Phase::Exhausted)
    }

    /// Terminal status, once reached.
    pub fn status(&self) -> Option<TaskStatus> {
        match self.phase {
            Phase::Succeeded => Some(TaskStatus::Succeeded),
            Phase::Exhausted => Some(TaskStatus::Failed),
            Phase::Attempting | Phase::RetryPending => None,
        }
    }
}

/// Final result of the retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub status: TaskStatus,
    pub attempts: u32,
    /// Result of the last attempt run.
    pub last: AttemptResult,
}

/// Drives a runner through the retry policy.
pub struct RetryController<R, D> {
    runner: R,
    delay: D,
    policy: RetryPolicy,
    fail_on_stderr: bool,
}

impl<R, D> RetryController<R, D>
where
    R: ScriptRunner,
    D: Delay,
{
    pub fn new(runner: R, delay: D, policy: RetryPolicy, fail_on_stderr: bool) -> Self {
        Self { runner, delay, policy, fail_on_stderr }
    }

    /// Run attempts of `script` until success or exhaustion.
    ///
    /// The same script is reused by every attempt. A runner error (the
    /// interpreter could not be spawned) ends the loop immediately.
    pub async fn run(
        &mut self,
        script: &MaterializedScript,
        reporter: &dyn Reporter,
    ) -> Result<RunReport, SetupError> {
        let mut state = RetryState::new(&self.policy);
        loop {
            let attempt = state.attempt();
            let span = tracing::info_span!(
                "rr.attempt",
                attempt,
                budget = self.policy.budget(),
                exit_code = tracing::field::Empty,
            );

            let result = self.runner.run(attempt, script).await?;
            span.record("exit_code", result.exit_code);

            let failed = result.failed(self.fail_on_stderr);
            if failed {
                if result.exit_code != 0 {
                    reporter.report(Progress::ExitCode { attempt, code: result.exit_code });
                }
                if self.fail_on_stderr && result.stderr_failure {
                    reporter.report(Progress::StderrObserved {
                        attempt,
                        sample: result.stderr.clone(),
                    });
                }
            }

            match state.record(failed) {
                Transition::Done(status) => {
                    span.in_scope(|| tracing::info!(%status, "attempt finished"));
                    return Ok(RunReport { status, attempts: attempt, last: result });
                }
                Transition::Retry => {
                    span.in_scope(|| tracing::info!("attempt failed, retrying"));
                    reporter.report(Progress::AttemptFailed { attempt });
                    reporter.report(Progress::Waiting { delay_secs: self.policy.delay_secs });
                    self.delay.wait(self.policy.delay()).await;
                    state.advance();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
