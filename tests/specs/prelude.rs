// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use predicates;

use assert_cmd::Command;

/// Returns a Command configured to run the patscan binary with
/// deterministic, color-free output. The assert_cmd wrapper supports
/// piped stdin in addition to `.args` and `.assert()`.
pub fn patscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("patscan"));
    cmd.arg("--no-color");
    cmd
}
