// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Search behavior: positions, edge cases, exit codes, stdin.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn reports_overlapping_matches() {
    patscan_cmd()
        .args(["ana", "banana"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches at positions 1, 3"));
}

#[test]
fn draws_markers_under_the_text() {
    patscan_cmd()
        .args(["ana", "banana"])
        .assert()
        .success()
        .stdout(predicates::str::contains("banana\n ^^^\n   ^^^\n"));
}

#[test]
fn no_match_exits_one() {
    patscan_cmd()
        .args(["world", "hello"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no matches"));
}

#[test]
fn empty_pattern_finds_nothing() {
    patscan_cmd().args(["", "banana"]).assert().code(1);
}

#[test]
fn pattern_longer_than_text_finds_nothing() {
    patscan_cmd().args(["hello", "hi"]).assert().code(1);
}

#[test]
fn exact_match_reports_position_zero() {
    patscan_cmd()
        .args(["hello", "hello"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 match at position 0"));
}

#[test]
fn ignore_case_folds_both_sides() {
    patscan_cmd()
        .args(["-i", "WORLD", "Hello World"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 match at position 6"));
}

#[test]
fn reads_text_from_stdin() {
    patscan_cmd()
        .args(["ana", "-"])
        .write_stdin("banana\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches at positions 1, 3"));
}

#[test]
fn stdin_text_strips_one_trailing_crlf() {
    patscan_cmd()
        .args(["ana", "-"])
        .write_stdin("banana\r\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches at positions 1, 3"));
}

#[test]
fn first_flag_prints_only_first_position() {
    patscan_cmd()
        .args(["--first", "ana", "banana"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn last_flag_prints_only_last_position() {
    patscan_cmd()
        .args(["--last", "ana", "banana"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn first_flag_prints_not_found_when_absent() {
    patscan_cmd()
        .args(["--first", "xyz", "banana"])
        .assert()
        .code(1)
        .stdout("not found\n");
}

#[test]
fn count_flag_prints_match_count() {
    patscan_cmd()
        .args(["--count", "aa", "aaaa"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn count_flag_prints_zero_when_absent() {
    patscan_cmd()
        .args(["--count", "xyz", "banana"])
        .assert()
        .code(1)
        .stdout("0\n");
}

#[test]
fn conflicting_query_flags_exit_with_usage_error() {
    patscan_cmd()
        .args(["--first", "--last", "ana", "banana"])
        .assert()
        .code(2);
}
