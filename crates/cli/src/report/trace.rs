// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Console rendering of the trace stream, one line per scan step.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::matcher::TraceEvent;

use super::{position_list, text::match_count};

/// Render trace events as they arrive.
///
/// Works directly off any event iterator, which makes it equally happy
/// draining a [`crossbeam_channel::Receiver`] from a scan running on
/// another thread or replaying a buffered [`VecSink`].
///
/// ```text
/// position 1:
///   text[1]='a' vs pattern[0]='a' ✓
///   text[2]='n' vs pattern[1]='n' ✓
///   text[3]='a' vs pattern[2]='a' ✓
///   match at 1
/// ```
///
/// [`VecSink`]: crate::matcher::VecSink
pub fn write_trace(
    out: &mut dyn WriteColor,
    events: impl IntoIterator<Item = TraceEvent>,
) -> io::Result<()> {
    for event in events {
        match event {
            TraceEvent::PositionStart { position } => {
                out.set_color(&scheme::position())?;
                write!(out, "position {position}:")?;
                out.reset()?;
                writeln!(out)?;
            }
            TraceEvent::CharCompare {
                position,
                offset,
                text_char,
                pattern_char,
                matched,
            } => {
                write!(
                    out,
                    "  text[{}]={:?} vs pattern[{}]={:?} ",
                    position + offset,
                    text_char,
                    offset,
                    pattern_char,
                )?;
                if matched {
                    out.set_color(&scheme::hit())?;
                    write!(out, "✓")?;
                } else {
                    out.set_color(&scheme::miss())?;
                    write!(out, "✗")?;
                }
                out.reset()?;
                writeln!(out)?;
            }
            TraceEvent::PositionResult { position, matched } => {
                if matched {
                    out.set_color(&scheme::found())?;
                    write!(out, "  match at {position}")?;
                } else {
                    out.set_color(&scheme::not_found())?;
                    write!(out, "  no match at {position}")?;
                }
                out.reset()?;
                writeln!(out)?;
            }
            TraceEvent::SearchSummary { matches } => {
                writeln!(out)?;
                out.set_color(&scheme::summary())?;
                write!(out, "{}", match_count(matches.len()))?;
                out.reset()?;
                if matches.is_empty() {
                    writeln!(out)?;
                } else {
                    writeln!(out, " at {}", position_list(&matches))?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
