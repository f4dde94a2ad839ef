// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Text output: the match list with caret markers drawn under the text.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;

use super::{SearchReport, position_list};

/// Render the full match report.
///
/// For single-line text, each match gets a caret line marking its
/// window, the way the classic console demos draw it:
///
/// ```text
/// banana
///  ^^^
///    ^^^
/// 2 matches at positions 1, 3
/// ```
///
/// Multi-line text skips the marker lines; column alignment has no
/// meaning there.
pub fn write_matches(out: &mut dyn WriteColor, report: &SearchReport<'_>) -> io::Result<()> {
    if report.count() == 0 {
        out.set_color(&scheme::not_found())?;
        write!(out, "no matches")?;
        out.reset()?;
        return writeln!(out);
    }

    let pattern_len = report.pattern.chars().count();
    if !report.text.contains('\n') {
        writeln!(out, "{}", report.text)?;
        for &position in report.positions {
            out.set_color(&scheme::marker())?;
            write!(out, "{}{}", " ".repeat(position), "^".repeat(pattern_len))?;
            out.reset()?;
            writeln!(out)?;
        }
    }

    out.set_color(&scheme::summary())?;
    write!(out, "{}", match_count(report.count()))?;
    out.reset()?;
    writeln!(out, " at {}", position_list(report.positions))
}

/// Render a single derived position (`--first` / `--last`).
pub fn write_position(out: &mut dyn WriteColor, position: Option<usize>) -> io::Result<()> {
    match position {
        Some(position) => writeln!(out, "{position}"),
        None => {
            out.set_color(&scheme::not_found())?;
            write!(out, "not found")?;
            out.reset()?;
            writeln!(out)
        }
    }
}

/// Render the match count (`--count`).
pub fn write_count(out: &mut dyn WriteColor, count: usize) -> io::Result<()> {
    writeln!(out, "{count}")
}

pub(super) fn match_count(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{count} matches")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
