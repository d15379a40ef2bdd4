// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress reporting seam

use rr_core::Progress;

/// Receives progress events; the host decides how to render them.
pub trait Reporter: Send + Sync {
    fn report(&self, progress: Progress);
}

