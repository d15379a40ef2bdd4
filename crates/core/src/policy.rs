// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution policies: retry budget, executable-bit handling, path namespaces

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Fixed-count, fixed-delay retry policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Additional attempts after the first one.
    #[serde(default)]
    pub retries: u32,
    /// Delay between attempts, in whole seconds.
    #[serde(default)]
    pub delay_secs: u64,
}

impl RetryPolicy {
    pub fn new(retries: u32, delay_secs: u64) -> Self {
        Self { retries, delay_secs }
    }

    /// Single attempt, no retry.
    pub fn once() -> Self {
        Self::default()
    }

    /// Total number of attempts allowed (`retries + 1`).
    pub fn budget(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

/// What to do with a file target that lacks the execute permission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Execute when executable, otherwise source the file with a warning.
    #[default]
    Fallback,
    /// Execute when executable, otherwise fail before any attempt.
    Strict,
    /// Always source the file without checking permissions.
    Always,
}

crate::simple_display! {
    SourceMode {
        Fallback => "fallback",
        Strict => "strict",
        Always => "always",
    }
}

impl FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fallback" => Ok(SourceMode::Fallback),
            "strict" => Ok(SourceMode::Strict),
            "always" => Ok(SourceMode::Always),
            other => Err(format!(
                "unknown source mode '{}' (expected fallback, strict or always)",
                other
            )),
        }
    }
}

/// Command that prints a directory as seen from the interpreter's runtime.
///
/// The probe runs with the host directory as its working directory; its
/// trimmed stdout is the translated path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathProbe {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Separator used to join a file name onto a translated directory.
    pub separator: String,
}

impl PathProbe {
    /// `cmd /D /E:ON /V:OFF /S /C cd` with backslash joins.
    pub fn cmd() -> Self {
        Self {
            program: "cmd".to_string(),
            args: ["/D", "/E:ON", "/V:OFF", "/S", "/C", "cd"].map(String::from).to_vec(),
            separator: "\\".to_string(),
        }
    }

    /// `bash --noprofile --norc -c pwd` with forward-slash joins.
    pub fn bash() -> Self {
        Self {
            program: "bash".to_string(),
            args: ["--noprofile", "--norc", "-c", "pwd"].map(String::from).to_vec(),
            separator: "/".to_string(),
        }
    }
}

/// Path convention in effect for the interpreter's runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathNamespace {
    /// Host and interpreter share paths; translation is the identity.
    #[default]
    Native,
    /// Paths are translated by running a probe inside the interpreter's runtime.
    Probe(PathProbe),
}

impl PathNamespace {
    pub fn is_native(&self) -> bool {
        matches!(self, PathNamespace::Native)
    }
}

/// Named namespace presets accepted on the command line and in task files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespacePreset {
    #[default]
    Native,
    Cmd,
    Bash,
}

crate::simple_display! {
    NamespacePreset {
        Native => "native",
        Cmd => "cmd",
        Bash => "bash",
    }
}

impl FromStr for NamespacePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(NamespacePreset::Native),
            "cmd" => Ok(NamespacePreset::Cmd),
            "bash" => Ok(NamespacePreset::Bash),
            other => {
                Err(format!("unknown path namespace '{}' (expected native, cmd or bash)", other))
            }
        }
    }
}

impl From<NamespacePreset> for PathNamespace {
    fn from(preset: NamespacePreset) -> Self {
        match preset {
            NamespacePreset::Native => PathNamespace::Native,
            NamespacePreset::Cmd => PathNamespace::Probe(PathProbe::cmd()),
            NamespacePreset::Bash => PathNamespace::Probe(PathProbe::bash()),
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
