// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rr-core: Data model for the rr script retry runner

pub mod macros;

pub mod attempt;
pub mod error;
pub mod id;
pub mod policy;
pub mod progress;
pub mod request;
pub mod task_file;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attempt::{AttemptResult, StderrSample, TaskStatus, STDERR_CHUNK_LIMIT, STDERR_ENTRY_LIMIT};
pub use error::SetupError;
pub use id::ScriptId;
pub use policy::{NamespacePreset, PathNamespace, PathProbe, RetryPolicy, SourceMode};
pub use progress::Progress;
pub use request::{ExecutionRequest, ScriptSource};
pub use task_file::{ScriptTable, TaskFile, TaskFileError};
