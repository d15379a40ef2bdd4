// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executable-permission predicates for file targets.
//!
//! The host picks the predicate; the default depends on the platform.

use std::fs::Metadata;
use std::path::Path;
use std::sync::Arc;

/// Decides whether a file target should be executed directly.
pub trait ExecutableCheck: Send + Sync {
    fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool;
}

/// Any of the owner, group, or other execute bits (`0o111`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyExecuteBit;

/// Only the "other" execute bit (`0o001`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OtherExecuteBit;

/// Every file counts as executable (platforms without POSIX modes).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeExecutable;

impl ExecutableCheck for AnyExecuteBit {
    fn is_executable(&self, _path: &Path, metadata: &Metadata) -> bool {
        permission_bits(metadata) & 0o111 != 0
    }
}

impl ExecutableCheck for OtherExecuteBit {
    fn is_executable(&self, _path: &Path, metadata: &Metadata) -> bool {
        permission_bits(metadata) & 0o001 != 0
    }
}

impl ExecutableCheck for AssumeExecutable {
    fn is_executable(&self, _path: &Path, _metadata: &Metadata) -> bool {
        true
    }
}

/// Raw POSIX mode bits, or `0` where the platform has none.
#[cfg(unix)]
pub fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
pub fn permission_bits(_metadata: &Metadata) -> u32 {
    0
}

/// Default predicate for the current platform.
pub(crate) fn platform_default() -> Arc<dyn ExecutableCheck> {
    if cfg!(unix) {
        Arc::new(AnyExecuteBit)
    } else {
        Arc::new(AssumeExecutable)
    }
}

#[cfg(all(test, unix))]
#[path = "permissions_tests.rs"]
mod tests;
