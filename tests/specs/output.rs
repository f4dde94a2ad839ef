// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Trace and JSON output formats.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn trace_shows_every_position() {
    let assert = patscan_cmd()
        .args(["--trace", "ana", "banana"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // limit = 6 - 3 + 1 candidate alignments
    for position in 0..=3 {
        assert!(stdout.contains(&format!("position {position}:")));
    }
    assert!(stdout.contains("no match at 0"));
    assert!(stdout.contains("match at 1"));
    assert!(stdout.ends_with("2 matches at positions 1, 3\n"));
}

#[test]
fn trace_stops_comparing_after_a_mismatch() {
    let assert = patscan_cmd()
        .args(["--trace", "ab", "xyz"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Each position mismatches on its first character; offset 1 of the
    // pattern is never compared.
    assert!(stdout.contains("pattern[0]"));
    assert!(!stdout.contains("pattern[1]"));
}

#[test]
fn json_output_carries_positions_and_derived_queries() {
    let assert = patscan_cmd()
        .args(["-o", "json", "ana", "banana"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["positions"], serde_json::json!([1, 3]));
    assert_eq!(doc["count"], 2);
    assert_eq!(doc["first"], 1);
    assert_eq!(doc["last"], 3);
    assert!(doc.get("trace").is_none());
}

#[test]
fn json_output_with_no_match_uses_nulls() {
    let assert = patscan_cmd()
        .args(["-o", "json", "xyz", "banana"])
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["count"], 0);
    assert!(doc["first"].is_null());
    assert!(doc["last"].is_null());
}

#[test]
fn json_trace_embeds_the_event_stream() {
    let assert = patscan_cmd()
        .args(["-o", "json", "--trace", "a", "ab"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let trace = doc["trace"].as_array().unwrap();
    assert_eq!(trace.first().unwrap()["event"], "position_start");
    assert_eq!(trace.last().unwrap()["event"], "search_summary");
}

#[test]
fn no_color_output_has_no_escape_codes() {
    let assert = patscan_cmd()
        .args(["--trace", "ana", "banana"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains('\u{1b}'));
}
