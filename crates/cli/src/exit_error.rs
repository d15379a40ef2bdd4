// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries the process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` owns process termination.

use std::fmt;

/// The script ran and reached the `failed` status.
pub const EXIT_FAILED: i32 = 1;

/// The request could not be set up (bad target, missing interpreter, ...).
pub const EXIT_SETUP: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Terminal failure whose details were already printed.
    pub fn failed() -> Self {
        Self::new(EXIT_FAILED, "")
    }

    /// Setup failure whose summary was already printed.
    pub fn setup_reported() -> Self {
        Self::new(EXIT_SETUP, "")
    }

    /// Whether `main()` has anything left to print.
    pub fn is_silent(&self) -> bool {
        self.message.is_empty()
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
