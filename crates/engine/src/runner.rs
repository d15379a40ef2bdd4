// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner: one interpreter invocation per attempt.

use crate::environment::Environment;
use crate::materialize::MaterializedScript;
use async_trait::async_trait;
use rr_core::{AttemptResult, ExecutionRequest, SetupError, StderrSample};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

const READ_CHUNK: usize = 8192;

/// Runs one attempt of a materialized script.
#[async_trait]
pub trait ScriptRunner: Send {
    async fn run(
        &mut self,
        attempt: u32,
        script: &MaterializedScript,
    ) -> Result<AttemptResult, SetupError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Spawns the interpreter and forwards both output streams to one sink.
///
/// Chunks are written in arrival order. Stdin is closed.
pub struct ProcessRunner<W> {
    interpreter: PathBuf,
    interpreter_args: Vec<String>,
    working_directory: PathBuf,
    fail_on_stderr: bool,
    sink: W,
}

impl<W> ProcessRunner<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(env: &Environment, request: &ExecutionRequest, sink: W) -> Self {
        Self {
            interpreter: env.interpreter_path.clone(),
            interpreter_args: request.interpreter_args.clone(),
            working_directory: request.working_directory.clone(),
            fail_on_stderr: request.fail_on_stderr,
            sink,
        }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    async fn forward(&mut self, chunk: &[u8]) {
        if let Err(e) = self.sink.write_all(chunk).await {
            tracing::warn!(error = %e, "failed to forward child output");
        }
    }
}

#[async_trait]
impl<W> ScriptRunner for ProcessRunner<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn run(
        &mut self,
        attempt: u32,
        script: &MaterializedScript,
    ) -> Result<AttemptResult, SetupError> {
        let program = self.interpreter.display().to_string();
        let spawn_error = |source| SetupError::Spawn { program: program.clone(), source };

        let mut child = tokio::process::Command::new(&self.interpreter)
            .args(&self.interpreter_args)
            .arg(&script.invocation_path)
            .current_dir(&self.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;
        tracing::debug!(attempt, interpreter = %program, script = %script.invocation_path, "spawned");

        let (tx, mut rx) = mpsc::channel::<(Stream, Vec<u8>)>(64);
        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(pump(stdout, Stream::Stdout, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(pump(stderr, Stream::Stderr, tx.clone()));
        }
        drop(tx);

        let mut stderr_failure = false;
        let mut sample = StderrSample::new();
        while let Some((stream, chunk)) = rx.recv().await {
            self.forward(&chunk).await;
            if stream == Stream::Stderr && self.fail_on_stderr {
                stderr_failure = true;
                sample.record(&chunk);
            }
        }
        if let Err(e) = self.sink.flush().await {
            tracing::warn!(error = %e, "failed to flush child output");
        }

        let status = child.wait().await.map_err(spawn_error)?;
        let exit_code = status.code().unwrap_or(-1);

        Ok(AttemptResult { attempt, exit_code, stderr_failure, stderr: sample })
    }
}

/// Read a child stream until EOF, sending each chunk as it arrives.
async fn pump<R>(mut reader: R, stream: Stream, tx: mpsc::Sender<(Stream, Vec<u8>)>)
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                if tx.send((stream, buf[..n].to_vec())).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(?stream, error = %e, "child stream read failed");
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
