// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Trace events describing each step of a scan, and the sinks that
//! consume them.
//!
//! Events are emitted synchronously, in order, and carry owned data
//! so sinks may hold them past the end of the search. Emission never
//! changes the match result; a sink is a pure observer.

use serde::Serialize;

/// One step of the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The scan is about to evaluate the alignment at `position`.
    PositionStart { position: usize },
    /// One character comparison. `text_char` is `text[position + offset]`,
    /// `pattern_char` is `pattern[offset]`.
    CharCompare {
        position: usize,
        offset: usize,
        text_char: char,
        pattern_char: char,
        matched: bool,
    },
    /// Outcome of the alignment at `position`.
    PositionResult { position: usize, matched: bool },
    /// Terminates every stream; `matches` equals the returned list.
    SearchSummary { matches: Vec<usize> },
}

/// Consumer of trace events.
///
/// Called synchronously by the scan, so implementations should be
/// cheap or hand off to another thread (see [`ChannelSink`]). Sinks
/// must not panic back into the scan.
pub trait TraceSink {
    fn accept(&mut self, event: TraceEvent);
}

/// Adapter that lets any closure act as a sink.
pub struct FnSink<F: FnMut(TraceEvent)>(pub F);

impl<F: FnMut(TraceEvent)> TraceSink for FnSink<F> {
    fn accept(&mut self, event: TraceEvent) {
        (self.0)(event)
    }
}

/// Buffers events in memory, for batch rendering and tests.
#[derive(Debug, Default)]
pub struct VecSink {
    pub events: Vec<TraceEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for VecSink {
    fn accept(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Forwards events over an unbounded channel so a consumer on another
/// thread renders at its own pace. The scan's timing is never gated by
/// rendering speed.
pub struct ChannelSink {
    tx: crossbeam_channel::Sender<TraceEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it. The channel
    /// disconnects when the sink is dropped, which ends a
    /// `receiver.iter()` loop cleanly.
    pub fn new() -> (Self, crossbeam_channel::Receiver<TraceEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl TraceSink for ChannelSink {
    fn accept(&mut self, event: TraceEvent) {
        // A dropped receiver means nobody is watching anymore.
        // The scan keeps going; its result does not depend on us.
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
