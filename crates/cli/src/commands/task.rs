// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rr task` - run a request described by a TOML file

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rr_core::{ExecutionRequest, TaskFile, TaskFileError};

use super::Context;

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Task file (TOML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Load a task file, resolving relative paths against its directory.
pub fn load_request(file: &Path) -> Result<ExecutionRequest, TaskFileError> {
    let base_dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    TaskFile::load(file)?.into_request(&base_dir)
}

pub async fn handle(args: TaskArgs, ctx: &Context) -> Result<()> {
    let request = match load_request(&args.file) {
        Ok(request) => request,
        Err(TaskFileError::Setup(e)) => return Err(super::report_setup_failure(e.to_string(), ctx)),
        Err(e) => return Err(e.into()),
    };
    super::run_request(request, ctx).await
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
