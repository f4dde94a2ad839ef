// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! JSON output for scripted consumers.

use serde_json::{Value, json};

use crate::matcher::TraceEvent;

use super::SearchReport;

/// Build the JSON document for a completed search.
///
/// Lengths are character counts, matching the position indexing.
/// `first` and `last` are `null` when there is no match. When `events`
/// is provided the full trace stream is included under `"trace"`.
pub fn render_json(report: &SearchReport<'_>, events: Option<&[TraceEvent]>) -> Value {
    let mut doc = json!({
        "pattern": report.pattern,
        "text_length": report.text.chars().count(),
        "pattern_length": report.pattern.chars().count(),
        "positions": report.positions,
        "count": report.count(),
        "first": report.first(),
        "last": report.last(),
    });
    if let Some(events) = events {
        doc["trace"] = json!(events);
    }
    doc
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
