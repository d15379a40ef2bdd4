// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script materialization: resolve the script text and write it to disk once.

use crate::permissions::{permission_bits, ExecutableCheck};
use crate::reporter::Reporter;
use crate::translate::PathTranslator;
use rr_core::{ExecutionRequest, Progress, ScriptId, ScriptSource, SetupError, SourceMode};
use std::path::{Path, PathBuf};

/// How a file target is invoked from the materialized script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// `<interpreter> '<path>' <args>`
    Execute,
    /// `. '<path>' <args>`
    Source,
}

/// The on-disk script for one request.
///
/// Written once before the first attempt and re-executed by every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedScript {
    pub id: ScriptId,
    /// Location on the host filesystem.
    pub host_path: PathBuf,
    /// Location as seen by the interpreter (translated when cross-namespace).
    pub invocation_path: String,
    /// Exact text written to `host_path`.
    pub contents: String,
}

/// Quote a path for a single-quoted shell word, escaping embedded quotes.
pub fn quote_single(path: &str) -> String {
    format!("'{}'", path.replace('\'', "'\\''"))
}

/// Writes request scripts into a scratch directory.
pub struct Materializer<'a> {
    scratch_dir: &'a Path,
    translator: &'a dyn PathTranslator,
    executable: &'a dyn ExecutableCheck,
}

impl<'a> Materializer<'a> {
    pub fn new(
        scratch_dir: &'a Path,
        translator: &'a dyn PathTranslator,
        executable: &'a dyn ExecutableCheck,
    ) -> Self {
        Self { scratch_dir, translator, executable }
    }

    /// Resolve the script text and write it to a fresh file.
    pub async fn materialize(
        &self,
        request: &ExecutionRequest,
        reporter: &dyn Reporter,
    ) -> Result<MaterializedScript, SetupError> {
        reporter.report(Progress::GeneratingScript);

        let contents = match &request.source {
            ScriptSource::File { path, arguments } => {
                let command = self.file_command(request, path, arguments, reporter).await?;
                reporter.report(Progress::FormattedCommand { command: command.clone() });
                command
            }
            ScriptSource::Inline { text } => {
                if request.source.should_echo() {
                    reporter.report(Progress::ScriptContents { text: text.clone() });
                }
                text.clone()
            }
        };

        let is_dir = tokio::fs::metadata(self.scratch_dir).await.map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            return Err(SetupError::ScratchDir { path: self.scratch_dir.to_path_buf() });
        }

        let id = ScriptId::new();
        let file_name = id.file_name(request.extension.as_deref());
        let host_path = self.scratch_dir.join(&file_name);
        tokio::fs::write(&host_path, contents.as_bytes())
            .await
            .map_err(|source| SetupError::ScriptWrite { path: host_path.clone(), source })?;
        tracing::debug!(path = %host_path.display(), bytes = contents.len(), "wrote script");

        let invocation_path = if self.translator.is_identity() {
            host_path.display().to_string()
        } else {
            let dir = self.translator.translate(self.scratch_dir).await?;
            format!("{}{}{}", dir, self.translator.separator(), file_name)
        };

        Ok(MaterializedScript { id, host_path, invocation_path, contents })
    }

    /// Build the invocation line for a file target.
    async fn file_command(
        &self,
        request: &ExecutionRequest,
        path: &Path,
        arguments: &str,
        reporter: &dyn Reporter,
    ) -> Result<String, SetupError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| SetupError::InvalidFilePath { path: path.to_path_buf() })?;
        if !metadata.is_file() {
            return Err(SetupError::InvalidFilePath { path: path.to_path_buf() });
        }

        let target = self.target_path(path).await?;
        let invocation = match request.source_mode {
            SourceMode::Always => Invocation::Source,
            _ if self.executable.is_executable(path, &metadata) => Invocation::Execute,
            mode => {
                let bits = permission_bits(&metadata);
                tracing::debug!(path = %path.display(), mode = format!("{bits:o}"), "file permissions");
                if mode == SourceMode::Strict {
                    return Err(SetupError::MissingExecutableBit { path: path.to_path_buf(), mode: bits });
                }
                tracing::warn!(path = %path.display(), "execute bit not set, sourcing instead");
                reporter.report(Progress::SourcingNonExecutable { path: path.to_path_buf() });
                Invocation::Source
            }
        };

        let program = match invocation {
            Invocation::Execute => request.interpreter.as_str(),
            Invocation::Source => ".",
        };
        Ok(format!("{} {} {}", program, quote_single(&target), arguments).trim().to_string())
    }

    /// Path of a file target as the interpreter sees it.
    ///
    /// The parent directory is translated and the file name is re-joined with
    /// `/`, which every supported interpreter runtime accepts.
    async fn target_path(&self, path: &Path) -> Result<String, SetupError> {
        if self.translator.is_identity() {
            return Ok(path.display().to_string());
        }
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let dir = self.translator.translate(parent).await?;
        Ok(format!("{}/{}", dir, name))
    }
}

#[cfg(test)]
#[path = "materialize_tests.rs"]
mod tests;
