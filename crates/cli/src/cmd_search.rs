// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! The search command: wires CLI inputs into the matcher and renders
//! the result.
//!
//! The matcher never knows it is being watched. In live trace mode it
//! runs on its own thread feeding a channel, and this module drains
//! the channel onto the terminal, so rendering speed can never change
//! what the scan finds.

use std::io::Read;
use std::thread;

use termcolor::StandardStream;
use tracing::debug;

use patscan::cli::{Cli, OutputFormat};
use patscan::color::resolve_color;
use patscan::error::{ExitCode, InputError};
use patscan::matcher::{self, ChannelSink, SearchOptions, TraceSink, VecSink};
use patscan::report::{self, SearchReport};

/// Run the search described by the CLI arguments.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let text = read_text(&cli.text)?;
    debug!(
        text_len = text.chars().count(),
        pattern_len = cli.pattern.chars().count(),
        ignore_case = cli.ignore_case,
        trace = cli.trace,
        "starting scan"
    );

    let mut stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));

    let positions = match (cli.output, cli.trace) {
        (OutputFormat::Text, true) => search_traced_live(cli, &text, &mut stdout)?,
        (OutputFormat::Json, true) => {
            let mut sink = VecSink::new();
            let positions = search(cli, &text, Some(&mut sink));
            let report = SearchReport {
                pattern: &cli.pattern,
                text: &text,
                positions: &positions,
            };
            let doc = report::render_json(&report, Some(&sink.events));
            println!("{}", serde_json::to_string_pretty(&doc)?);
            positions
        }
        (OutputFormat::Json, false) => {
            let positions = search(cli, &text, None);
            let report = SearchReport {
                pattern: &cli.pattern,
                text: &text,
                positions: &positions,
            };
            let doc = report::render_json(&report, None);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            positions
        }
        (OutputFormat::Text, false) => {
            let positions = search(cli, &text, None);
            let report = SearchReport {
                pattern: &cli.pattern,
                text: &text,
                positions: &positions,
            };
            write_text_result(cli, &report, &mut stdout)?;
            positions
        }
    };

    debug!(matches = positions.len(), "scan finished");
    Ok(ExitCode::from_match_count(positions.len()))
}

/// Dispatch to the matcher with the right case handling.
fn search(cli: &Cli, text: &str, trace: Option<&mut dyn TraceSink>) -> Vec<usize> {
    let opts = SearchOptions { trace, cancel: None };
    if cli.ignore_case {
        matcher::search_case_insensitive_with(text, &cli.pattern, opts)
    } else {
        matcher::search_with(text, &cli.pattern, opts)
    }
}

/// Trace mode: scan on a worker thread, render events as they arrive.
///
/// The channel is unbounded, so the scan never waits on the terminal.
/// The render loop ends when the scan finishes and drops its sink.
fn search_traced_live(
    cli: &Cli,
    text: &str,
    out: &mut StandardStream,
) -> anyhow::Result<Vec<usize>> {
    let (sink, rx) = ChannelSink::new();
    thread::scope(|scope| {
        let scan = scope.spawn(move || {
            let mut sink = sink;
            search(cli, text, Some(&mut sink))
        });
        report::write_trace(out, rx.iter())?;
        scan.join()
            .map_err(|_| anyhow::anyhow!("scan thread panicked"))
    })
}

/// Render text output for a finished (non-trace) search.
fn write_text_result(
    cli: &Cli,
    report: &SearchReport<'_>,
    out: &mut StandardStream,
) -> std::io::Result<()> {
    if cli.first {
        report::write_position(out, report.first())
    } else if cli.last {
        report::write_position(out, report.last())
    } else if cli.count {
        report::write_count(out, report.count())
    } else {
        report::write_matches(out, report)
    }
}

/// The text argument, or stdin when it is `-`.
///
/// One trailing newline is stripped from piped input so `echo banana |
/// patscan ana -` behaves like `patscan ana banana`.
fn read_text(arg: &str) -> Result<String, InputError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
