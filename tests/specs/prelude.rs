// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for black-box CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// `rr` with a clean environment and no project directory.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Temporary working directory with its own scratch dir.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".scratch")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn scratch(&self) -> PathBuf {
        self.dir.path().join(".scratch")
    }

    /// Write a file relative to the project root, creating parent dirs.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Write a file and set its permission bits.
    #[cfg(unix)]
    pub fn file_with_mode(&self, rel: &str, contents: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.file(rel, contents);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// Files currently in the scratch dir.
    pub fn scratch_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = std::fs::read_dir(self.scratch())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        files.sort();
        files
    }

    /// `rr` running inside the project with its scratch dir.
    pub fn rr(&self) -> CliBuilder {
        CliBuilder::new().current_dir(self.path()).env("RR_SCRATCH_DIR", self.scratch())
    }

    /// Path argument for `--cwd`.
    pub fn cwd(&self) -> String {
        self.path().display().to_string()
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("rr").unwrap();
        for var in ["RR_SCRATCH_DIR", "AGENT_TEMPDIRECTORY", "RR_BASH_SOURCE_SCRIPTS", "RR_LOG", "COLOR"] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    fn output(mut self) -> Output {
        self.cmd.output().unwrap()
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> RunAssert {
        self.code(0)
    }

    /// Run and assert a non-zero exit code.
    pub fn fails(self) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    /// Run and assert a specific exit code.
    pub fn code(self, expected: i32) -> RunAssert {
        let run = RunAssert { output: self.output() };
        assert_eq!(run.output.status.code(), Some(expected), "\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    /// Assert the whole stdout, with a line diff on mismatch.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Number of times `needle` appears on stdout.
    pub fn stdout_count(&self, needle: &str) -> usize {
        self.stdout().matches(needle).count()
    }

    /// Parse the last stdout line as the JSON summary.
    pub fn summary(&self) -> serde_json::Value {
        let stdout = self.stdout();
        let last = stdout.lines().last().unwrap_or_default();
        serde_json::from_str(last)
            .unwrap_or_else(|e| panic!("last line is not JSON ({e}): {last:?}\n{}", self.describe()))
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status,
            self.stdout(),
            self.stderr()
        )
    }
}
