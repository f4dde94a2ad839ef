// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! CLI argument parsing with clap derive.

use clap::Parser;

use crate::color::ColorMode;

/// Naive substring search with a step-by-step comparison trace
#[derive(Parser)]
#[command(name = "patscan")]
#[command(version, about, long_about = None)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Text to search in, or `-` to read it from stdin
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Show every comparison the scan performs
    #[arg(long)]
    pub trace: bool,

    /// Ignore case when comparing characters
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Print only the first match position
    #[arg(long, conflicts_with_all = ["last", "count"])]
    pub first: bool,

    /// Print only the last match position
    #[arg(long, conflicts_with = "count")]
    pub last: bool,

    /// Print only the number of matches
    #[arg(long)]
    pub count: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose diagnostic output on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Help text styling.
fn help_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(anstyle::Style::new().bold())
        .usage(anstyle::Style::new().bold())
        .literal(anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Cyan.into())))
        .placeholder(anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
