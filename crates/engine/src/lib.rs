// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rr-engine: Script materialization, execution, and the retry loop

mod delay;
mod environment;
mod execute;
mod materialize;
mod permissions;
mod reporter;
mod retry;
mod runner;
mod translate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use delay::{Delay, TokioDelay};
pub use environment::Environment;
pub use execute::{execute, Outcome};
pub use materialize::{quote_single, Invocation, MaterializedScript, Materializer};
pub use permissions::{
    permission_bits, AnyExecuteBit, AssumeExecutable, ExecutableCheck, OtherExecuteBit,
};
pub use reporter::Reporter;
pub use retry::{Phase, RetryController, RetryState, RunReport, Transition};
pub use runner::{ProcessRunner, ScriptRunner};
pub use translate::{translator_for, NativePaths, PathTranslator, ProbeTranslator};
