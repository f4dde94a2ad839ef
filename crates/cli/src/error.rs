// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Exit codes and the input error type.
//!
//! The search core has no error states at all: every degenerate input
//! normalizes to an empty result. Errors only exist at the driver
//! boundary, where stdin can fail.

/// Process exit codes, following the grep convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one match was found.
    MatchFound = 0,
    /// The search completed and found nothing.
    NoMatch = 1,
    /// Bad usage or unreadable input.
    UsageError = 2,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for a completed search with the given match count.
    pub fn from_match_count(count: usize) -> Self {
        if count > 0 {
            ExitCode::MatchFound
        } else {
            ExitCode::NoMatch
        }
    }
}

/// Failure to obtain the text to search.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read text from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
