// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::color;
use clap::ValueEnum;
use rr_core::TaskStatus;
use rr_engine::Outcome;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Final summary of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub status: TaskStatus,
    pub attempts: u32,
    pub exit_code: Option<i32>,
    pub error: Option<String>,
}

impl Summary {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            status: outcome.status,
            attempts: outcome.attempts,
            exit_code: outcome.exit_code(),
            error: outcome.error.as_ref().map(ToString::to_string),
        }
    }

    /// Setup failure raised before the engine ran.
    pub fn setup_failed(error: impl Into<String>) -> Self {
        Self { status: TaskStatus::Failed, attempts: 0, exit_code: None, error: Some(error.into()) }
    }

    /// One-line human summary.
    pub fn text(&self) -> String {
        let plural = if self.attempts == 1 { "" } else { "s" };
        match (&self.error, self.status) {
            (Some(error), _) => format!("Task failed: {error}"),
            (None, TaskStatus::Succeeded) => {
                format!("Task succeeded after {} attempt{plural}", self.attempts)
            }
            (None, TaskStatus::Failed) => format!(
                "Task failed after {} attempt{plural} (exit code {})",
                self.attempts,
                self.exit_code.unwrap_or(-1)
            ),
        }
    }
}

/// Print the final summary in the selected format.
pub fn print_summary(summary: &Summary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let line = summary.text();
            if summary.status.is_success() {
                println!("{}", color::header(&line));
            } else {
                println!("{}", color::error(&line));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(summary)?);
        }
    }
    Ok(())
}
