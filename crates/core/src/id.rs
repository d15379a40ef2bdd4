// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifiers for materialized scripts

use std::fmt;

/// Collision-resistant identifier used as the file stem of a materialized script.
///
/// Generated from a random UUID v4 so concurrent runs sharing one scratch
/// directory never pick the same file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptId(String);

impl ScriptId {
    /// Generate a new random ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create ID from an existing string (tests, replays)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for this script, with an optional extension.
    ///
    /// A leading `.` on the extension is ignored so `"sh"` and `".sh"` both
    /// produce `<id>.sh`. Empty extensions produce a bare `<id>`.
    pub fn file_name(&self, extension: Option<&str>) -> String {
        match extension.map(|ext| ext.trim_start_matches('.')) {
            Some(ext) if !ext.is_empty() => format!("{}.{}", self.0, ext),
            _ => self.0.clone(),
        }
    }
}

impl Default for ScriptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScriptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
