// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Rendering of search results and trace streams.
//!
//! Reporters are pure consumers of the matcher's output: they never
//! influence what was found, only how it is shown.

mod json;
mod text;
mod trace;

pub use json::render_json;
pub use text::{write_count, write_matches, write_position};
pub use trace::write_trace;

/// Everything the reporters need about one completed search.
pub struct SearchReport<'a> {
    /// The pattern as the user typed it (pre-fold).
    pub pattern: &'a str,
    /// The text as searched.
    pub text: &'a str,
    /// Ascending match start positions, character indices.
    pub positions: &'a [usize],
}

impl SearchReport<'_> {
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.positions.last().copied()
    }
}

/// `"position 1"` / `"positions 1, 3"`, shared by text and trace output.
fn position_list(positions: &[usize]) -> String {
    let joined = positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if positions.len() == 1 {
        format!("position {joined}")
    } else {
        format!("positions {joined}")
    }
}
