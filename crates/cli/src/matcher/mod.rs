// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Brute-force substring search.
//!
//! Checks every candidate alignment of the pattern against the text,
//! left to right, abandoning a position on its first mismatching
//! character. O(n·m) by design: the point of this crate is the
//! step-by-step trace, not throughput. Positions are character
//! indices, so multi-byte text behaves the same as ASCII.

pub mod cancel;
pub mod trace;

pub use cancel::CancelToken;
pub use trace::{ChannelSink, FnSink, TraceEvent, TraceSink, VecSink};

/// Knobs for a single search invocation.
///
/// The default is a plain search: no trace, no cancellation.
#[derive(Default)]
pub struct SearchOptions<'a> {
    /// Receives one event per step of the scan, in emission order.
    pub trace: Option<&'a mut dyn TraceSink>,
    /// Cooperative stop flag, polled between comparisons.
    pub cancel: Option<&'a CancelToken>,
}

/// Find every position at which `pattern` occurs in `text`.
///
/// Returns the ascending list of match start positions (character
/// indices). Overlapping matches are all reported: `"ana"` in
/// `"banana"` yields `[1, 3]`. Degenerate inputs (empty pattern,
/// empty text, pattern longer than text) produce an empty list,
/// never an error.
pub fn search(text: &str, pattern: &str) -> Vec<usize> {
    search_with(text, pattern, SearchOptions::default())
}

/// [`search`] with trace emission and cooperative cancellation.
///
/// When a trace sink is attached, every scan (including a degenerate
/// or cancelled one) terminates its event stream with a
/// [`TraceEvent::SearchSummary`] carrying exactly the returned list.
/// Cancellation stops the scan at the next comparison boundary and
/// returns the partial list accumulated so far; every position already
/// reported remains a true match.
pub fn search_with(text: &str, pattern: &str, mut opts: SearchOptions<'_>) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let mut matches: Vec<usize> = Vec::new();

    if pattern.is_empty() || text.is_empty() || pattern.len() > text.len() {
        finish(&mut opts.trace, &matches);
        return matches;
    }

    // One candidate alignment per position where the pattern still fits.
    let limit = text.len() - pattern.len() + 1;

    'scan: for position in 0..limit {
        if is_cancelled(opts.cancel) {
            break 'scan;
        }
        emit(&mut opts.trace, TraceEvent::PositionStart { position });

        let mut matched = true;
        for (offset, &pattern_char) in pattern.iter().enumerate() {
            if is_cancelled(opts.cancel) {
                break 'scan;
            }
            let text_char = text[position + offset];
            let chars_equal = text_char == pattern_char;
            emit(
                &mut opts.trace,
                TraceEvent::CharCompare {
                    position,
                    offset,
                    text_char,
                    pattern_char,
                    matched: chars_equal,
                },
            );
            if !chars_equal {
                // First mismatch settles this position. Remaining
                // offsets are never compared.
                matched = false;
                break;
            }
        }

        emit(&mut opts.trace, TraceEvent::PositionResult { position, matched });
        if matched {
            matches.push(position);
        }
    }

    finish(&mut opts.trace, &matches);
    matches
}

/// Position of the first match, or `None` if the pattern never occurs.
pub fn first_occurrence(text: &str, pattern: &str) -> Option<usize> {
    search(text, pattern).first().copied()
}

/// Position of the last match, or `None` if the pattern never occurs.
pub fn last_occurrence(text: &str, pattern: &str) -> Option<usize> {
    search(text, pattern).last().copied()
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    search(text, pattern).len()
}

/// [`search`] after folding both inputs to lowercase.
pub fn search_case_insensitive(text: &str, pattern: &str) -> Vec<usize> {
    search_case_insensitive_with(text, pattern, SearchOptions::default())
}

/// [`search_with`] after folding both inputs to lowercase.
///
/// The fold is a pre-transform, not a different algorithm: positions
/// in the result index into the original (unfolded) inputs, which the
/// length-preserving fold keeps aligned.
pub fn search_case_insensitive_with(
    text: &str,
    pattern: &str,
    opts: SearchOptions<'_>,
) -> Vec<usize> {
    search_with(&fold_case(text), &fold_case(pattern), opts)
}

/// Length-preserving lowercase fold.
///
/// Each char maps to exactly one char. A char whose Unicode lowercase
/// expansion is more than one char (e.g. 'İ') would shift every later
/// position, so it is kept unchanged instead.
fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

fn emit(sink: &mut Option<&mut dyn TraceSink>, event: TraceEvent) {
    if let Some(sink) = sink.as_deref_mut() {
        sink.accept(event);
    }
}

/// Terminate a trace stream with the summary event.
fn finish(sink: &mut Option<&mut dyn TraceSink>, matches: &[usize]) {
    if let Some(sink) = sink.as_deref_mut() {
        sink.accept(TraceEvent::SearchSummary { matches: matches.to_vec() });
    }
}

fn is_cancelled(cancel: Option<&CancelToken>) -> bool {
    cancel.is_some_and(CancelToken::is_cancelled)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
