// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-resolved inputs shared by every component of a run

use crate::permissions::{platform_default, ExecutableCheck};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Values the host resolves once before a run starts.
#[derive(Clone)]
pub struct Environment {
    /// Absolute path of the interpreter executable.
    pub interpreter_path: PathBuf,
    /// Directory that receives the materialized script.
    pub scratch_dir: PathBuf,
    pub executable: Arc<dyn ExecutableCheck>,
}

impl Environment {
    pub fn new(interpreter_path: impl Into<PathBuf>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            interpreter_path: interpreter_path.into(),
            scratch_dir: scratch_dir.into(),
            executable: platform_default(),
        }
    }

    pub fn with_executable_check(mut self, check: Arc<dyn ExecutableCheck>) -> Self {
        self.executable = check;
        self
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("interpreter_path", &self.interpreter_path)
            .field("scratch_dir", &self.scratch_dir)
            .finish_non_exhaustive()
    }
}
