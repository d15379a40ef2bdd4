// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fakes for exercising the retry loop without real processes or sleeps.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::delay::Delay;
use crate::materialize::MaterializedScript;
use crate::reporter::Reporter;
use crate::runner::ScriptRunner;
use crate::translate::PathTranslator;
use async_trait::async_trait;
use parking_lot::Mutex;
use rr_core::{AttemptResult, Progress, SetupError};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Reporter that keeps every event in order.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<Progress>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Progress> {
        self.events.lock().clone()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&Progress) -> bool) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, progress: Progress) {
        self.events.lock().push(progress);
    }
}

/// Delay that returns immediately and records the requested durations.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().push(duration);
    }
}

/// Runner that replays scripted exit codes and stderr outcomes.
///
/// Each call pops the next result (re-numbered with the live attempt). When
/// the script runs out, the last result repeats.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    results: Arc<Mutex<VecDeque<AttemptResult>>>,
    last: Arc<Mutex<Option<AttemptResult>>>,
    seen: Arc<Mutex<Vec<MaterializedScript>>>,
}

impl ScriptedRunner {
    pub fn new(results: impl IntoIterator<Item = AttemptResult>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into_iter().collect())),
            ..Self::default()
        }
    }

    /// Runner whose attempts exit with the given codes.
    pub fn exit_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self::new(codes.into_iter().map(|code| AttemptResult::new(0, code)))
    }

    /// Number of attempts run so far.
    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }

    /// Scripts handed to each attempt, in order.
    pub fn scripts(&self) -> Vec<MaterializedScript> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl ScriptRunner for ScriptedRunner {
    async fn run(
        &mut self,
        attempt: u32,
        script: &MaterializedScript,
    ) -> Result<AttemptResult, SetupError> {
        self.seen.lock().push(script.clone());
        let next = self.results.lock().pop_front();
        let mut result = match next {
            Some(result) => {
                *self.last.lock() = Some(result.clone());
                result
            }
            None => self.last.lock().clone().unwrap_or_default(),
        };
        result.attempt = attempt;
        Ok(result)
    }
}

/// Translator that maps every directory under a fixed root.
#[derive(Debug, Clone)]
pub struct PrefixTranslator {
    pub root: String,
    pub separator: String,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl PrefixTranslator {
    pub fn new(root: &str, separator: &str) -> Self {
        Self { root: root.to_string(), separator: separator.to_string(), calls: Arc::default() }
    }

    /// Directories translated so far.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PathTranslator for PrefixTranslator {
    async fn translate(&self, dir: &Path) -> Result<String, SetupError> {
        self.calls.lock().push(dir.to_path_buf());
        let name = dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Ok(format!("{}/{}", self.root, name))
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

/// Materialized script pointing at a path that is never executed.
pub fn fake_script(contents: &str) -> MaterializedScript {
    MaterializedScript {
        id: rr_core::ScriptId::from_string("fake"),
        host_path: PathBuf::from("/scratch/fake.sh"),
        invocation_path: "/scratch/fake.sh".to_string(),
        contents: contents.to_string(),
    }
}
