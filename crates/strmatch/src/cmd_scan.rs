// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch scan` command implementation.

use rayon::prelude::*;

use strmatch::automaton::AhoCorasick;
use strmatch::cli::ScanArgs;
use strmatch::config::Config;
use strmatch::error::ExitCode;
use strmatch::file_reader;
use strmatch::report::{self, InputMatches, ScanReport};

/// Run the `strmatch scan` command: one automaton, scanned over every input.
pub fn run(args: &ScanArgs, config: &Config, color: bool) -> anyhow::Result<ExitCode> {
    let automaton = AhoCorasick::build_str(&args.patterns)?;
    let sources = file_reader::load_sources(&args.paths)?;
    tracing::debug!(
        "scanning {} inputs with {} patterns ({} states)",
        sources.len(),
        automaton.pattern_count(),
        automaton.state_count()
    );

    let inputs: Vec<InputMatches> = sources
        .par_iter()
        .map(|source| InputMatches {
            label: source.label.clone(),
            matches: automaton.scan(source.content.as_bytes()),
        })
        .collect();

    let report = ScanReport {
        patterns: &args.patterns,
        inputs,
    };
    let format = args.output.unwrap_or_else(|| config.output_format());
    print!("{}", report::formatter(format, color).scan(&report)?);

    Ok(if report.total() > 0 { ExitCode::Success } else { ExitCode::NoMatch })
}
