// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attempt results, stderr sampling, and terminal status

use serde::{Deserialize, Serialize};

/// Maximum number of stderr writes kept in a sample.
pub const STDERR_ENTRY_LIMIT: usize = 10;

/// Maximum bytes kept from a single stderr write.
pub const STDERR_CHUNK_LIMIT: usize = 1000;

const TRUNCATED_SUFFIX: &str = "<truncated>";

/// Appended once when more than [`STDERR_ENTRY_LIMIT`] writes were observed.
pub const STDERR_OVERFLOW_SENTINEL: &str = "Additional writes to stderr truncated";

/// Bounded sample of stderr writes from one attempt.
///
/// Holds at most [`STDERR_ENTRY_LIMIT`] entries of at most
/// [`STDERR_CHUNK_LIMIT`] bytes each (plus a `<truncated>` suffix when cut),
/// followed by a single overflow sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StderrSample {
    entries: Vec<String>,
}

impl StderrSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one stderr write.
    pub fn record(&mut self, chunk: &[u8]) {
        if self.entries.len() < STDERR_ENTRY_LIMIT {
            if chunk.len() > STDERR_CHUNK_LIMIT {
                let head = String::from_utf8_lossy(&chunk[..STDERR_CHUNK_LIMIT]);
                self.entries.push(format!("{}{}", head, TRUNCATED_SUFFIX));
            } else {
                self.entries.push(String::from_utf8_lossy(chunk).into_owned());
            }
        } else if self.entries.len() == STDERR_ENTRY_LIMIT {
            self.entries.push(STDERR_OVERFLOW_SENTINEL.to_string());
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether writes were dropped after the entry limit.
    pub fn overflowed(&self) -> bool {
        self.entries.len() > STDERR_ENTRY_LIMIT
    }
}

/// Outcome of a single attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    /// 1-based attempt number.
    pub attempt: u32,
    /// Process exit code (`-1` when terminated by a signal).
    pub exit_code: i32,
    /// At least one stderr write was seen while stderr failure was enabled.
    pub stderr_failure: bool,
    pub stderr: StderrSample,
}

impl AttemptResult {
    pub fn new(attempt: u32, exit_code: i32) -> Self {
        Self { attempt, exit_code, ..Self::default() }
    }

    /// Classify this attempt.
    ///
    /// Failed when the exit code is non-zero, or when stderr failure is enabled
    /// and stderr was written to.
    pub fn failed(&self, fail_on_stderr: bool) -> bool {
        self.exit_code != 0 || (fail_on_stderr && self.stderr_failure)
    }
}

/// Terminal status reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Succeeded,
    Failed,
}

impl TaskStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskStatus::Succeeded)
    }
}

crate::simple_display! {
    TaskStatus {
        Succeeded => "succeeded",
        Failed => "failed",
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
