// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path translation between the host and the interpreter's runtime.

use crate::environment::Environment;
use async_trait::async_trait;
use rr_core::{ExecutionRequest, PathNamespace, PathProbe, SetupError};
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Maps host directories to the path the interpreter sees.
#[async_trait]
pub trait PathTranslator: Send + Sync {
    /// Translate a host directory.
    async fn translate(&self, dir: &Path) -> Result<String, SetupError>;

    /// Separator for joining a file name onto a translated directory.
    fn separator(&self) -> &str;

    /// True when paths pass through unchanged.
    fn is_identity(&self) -> bool {
        false
    }
}

/// Identity translation for hosts that share the interpreter's namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePaths;

#[async_trait]
impl PathTranslator for NativePaths {
    async fn translate(&self, dir: &Path) -> Result<String, SetupError> {
        Ok(dir.display().to_string())
    }

    fn separator(&self) -> &str {
        std::path::MAIN_SEPARATOR_STR
    }

    fn is_identity(&self) -> bool {
        true
    }
}

/// Runs a directory-printing probe with the host directory as its cwd.
///
/// Exactly one process per call. Any stderr output, a non-zero exit, or an
/// empty stdout fails the translation; nothing is retried here.
#[derive(Debug, Clone)]
pub struct ProbeTranslator {
    probe: PathProbe,
    program: PathBuf,
}

impl ProbeTranslator {
    pub fn new(probe: PathProbe) -> Self {
        let program = PathBuf::from(&probe.program);
        Self { probe, program }
    }

    /// Spawn `program` instead of looking the probe's name up again.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl PathTranslator for ProbeTranslator {
    async fn translate(&self, dir: &Path) -> Result<String, SetupError> {
        let fail =
            |reason: String| SetupError::PathTranslation { path: dir.to_path_buf(), reason };

        let output = tokio::process::Command::new(&self.program)
            .args(&self.probe.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| fail(format!("failed to spawn `{}`: {}", self.program.display(), e)))?;

        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(fail(format!("probe wrote to stderr: {}", stderr.trim())));
        }
        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            return Err(fail(format!("probe exited with code {}", code)));
        }

        let translated = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if translated.is_empty() {
            return Err(fail("probe printed nothing".to_string()));
        }
        tracing::debug!(dir = %dir.display(), %translated, "translated path");
        Ok(translated)
    }

    fn separator(&self) -> &str {
        &self.probe.separator
    }
}

/// Translator for the request's namespace.
///
/// A probe naming the request's interpreter runs the resolved interpreter
/// path, so the probe and the attempts see the same runtime.
pub fn translator_for(request: &ExecutionRequest, env: &Environment) -> Box<dyn PathTranslator> {
    match &request.path_namespace {
        PathNamespace::Native => Box::new(NativePaths),
        PathNamespace::Probe(probe) => {
            let translator = ProbeTranslator::new(probe.clone());
            if probe.program == request.interpreter {
                Box::new(translator.with_program(&env.interpreter_path))
            } else {
                Box::new(translator)
            }
        }
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
