// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Patscan Contributors

//! Binary entry point: parse args, set up logging, run the search.

use clap::Parser;

use patscan::cli::Cli;
use patscan::error::ExitCode;

mod cmd_search;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cmd_search::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::UsageError
        }
    };
    std::process::exit(code.code());
}

/// Diagnostics go to stderr so stdout stays clean for results.
/// `PATSCAN_LOG` overrides the level; `--verbose` defaults it to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "patscan=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PATSCAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
