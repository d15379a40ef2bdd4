// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console rendering of progress events.

use crate::color;
use rr_core::Progress;
use rr_engine::Reporter;
use std::io::Write;

const OUTPUT_BANNER: &str =
    "========================== Starting Command Output ===========================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Context,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self { tone, text: text.into() }
    }

    fn painted(&self) -> String {
        match self.tone {
            Tone::Plain => self.text.clone(),
            Tone::Header => color::header(&self.text),
            Tone::Context => color::context(&self.text),
            Tone::Warn => color::warn(&self.text),
            Tone::Error => color::error(&self.text),
        }
    }
}

/// Lines printed for one progress event.
pub fn render(progress: &Progress) -> Vec<Line> {
    match progress {
        Progress::GeneratingScript => vec![Line::new(Tone::Context, "Generating script.")],
        Progress::FormattedCommand { command } => {
            vec![Line::new(Tone::Context, format!("Formatted command: {command}"))]
        }
        Progress::ScriptContents { text } => vec![
            Line::new(Tone::Context, "Script contents:"),
            Line::new(Tone::Plain, text.clone()),
        ],
        Progress::SourcingNonExecutable { path } => vec![Line::new(
            Tone::Warn,
            format!("warning: '{}' is not executable, sourcing it instead", path.display()),
        )],
        Progress::StartingOutput => vec![Line::new(Tone::Header, OUTPUT_BANNER)],
        Progress::ExitCode { attempt, code } => vec![Line::new(
            Tone::Error,
            format!("Attempt {attempt} exited with code {code}"),
        )],
        Progress::StderrObserved { attempt, sample } => {
            let mut lines = vec![Line::new(Tone::Error, format!("Attempt {attempt} wrote to stderr:"))];
            lines.extend(sample.entries().iter().map(|e| Line::new(Tone::Plain, e.trim_end())));
            lines
        }
        Progress::AttemptFailed { attempt } => {
            vec![Line::new(Tone::Warn, format!("Attempt {attempt} failed, retrying"))]
        }
        Progress::Waiting { delay_secs } => {
            vec![Line::new(Tone::Context, format!("Waiting {delay_secs}s before the next attempt"))]
        }
    }
}

/// Prints progress to stdout, alongside the child's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, progress: Progress) {
        tracing::debug!(event = progress.name(), "progress");
        let mut out = std::io::stdout().lock();
        for line in render(&progress) {
            let _ = writeln!(out, "{}", line.painted());
        }
        let _ = out.flush();
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
