// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{AttemptResult, ExecutionRequest, RetryPolicy};
use std::path::Path;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for retry policies and attempt outcomes.
pub mod strategies {
    use crate::{RetryPolicy, SourceMode};
    use proptest::prelude::*;

    /// Retry policies with small budgets and zero delay.
    pub fn arb_retry_policy() -> impl Strategy<Value = RetryPolicy> {
        (0u32..8).prop_map(|retries| RetryPolicy::new(retries, 0))
    }

    pub fn arb_source_mode() -> impl Strategy<Value = SourceMode> {
        prop_oneof![Just(SourceMode::Fallback), Just(SourceMode::Strict), Just(SourceMode::Always),]
    }

    /// Exit codes for a sequence of attempts, biased towards failures.
    pub fn arb_exit_codes(len: usize) -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(prop_oneof![3 => 1..=255i32, 1 => Just(0)], len)
    }
}

// ── Factories ───────────────────────────────────────────────────────────

/// Inline request running in `dir` with the given retry policy.
pub fn inline_request(text: &str, dir: &Path, retry: RetryPolicy) -> ExecutionRequest {
    ExecutionRequest::inline(text, dir).retry(retry)
}

/// Attempt result that exited with `code` and wrote nothing to stderr.
pub fn exited(attempt: u32, code: i32) -> AttemptResult {
    AttemptResult::new(attempt, code)
}

/// Clean exit that wrote `chunks` to stderr.
pub fn wrote_stderr(attempt: u32, chunks: &[&str]) -> AttemptResult {
    let mut result = AttemptResult::new(attempt, 0);
    result.stderr_failure = !chunks.is_empty();
    for chunk in chunks {
        result.stderr.record(chunk.as_bytes());
    }
    result
}
