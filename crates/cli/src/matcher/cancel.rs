// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Cooperative cancellation for long scans.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable stop flag shared between a driver and a running scan.
///
/// The scan polls the token at every position boundary and every
/// character comparison. Cancelling yields the partial match list
/// accumulated so far, not an error; everything found before the
/// cancel is still a true match.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the scan stop at its next comparison boundary.
    /// Idempotent; the token cannot be reset.
    pub fn cancel(&self) {
        // Relaxed is enough: the flag is a one-way latch, and one
        // extra comparison after cancel is harmless.
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
