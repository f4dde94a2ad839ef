// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Naive substring search with a step-by-step comparison trace.
//!
//! The algorithmic core lives in [`matcher`] and is pure: text and
//! pattern in, ascending match positions out, with an optional stream
//! of [`matcher::TraceEvent`]s describing every comparison performed.
//! Everything else here ([`cli`], [`color`], [`report`]) is
//! presentation layered on top of that stream.

pub mod cli;
pub mod color;
pub mod error;
pub mod matcher;
pub mod report;
