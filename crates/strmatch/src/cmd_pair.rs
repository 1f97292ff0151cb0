// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch lcs` and `strmatch distance` command implementations.

use strmatch::cli::PairArgs;
use strmatch::config::Config;
use strmatch::distance::edit_distance_str;
use strmatch::error::ExitCode;
use strmatch::lcs::longest_common_substring_str;
use strmatch::report;

/// Run the `strmatch lcs` command.
pub fn run_lcs(args: &PairArgs, config: &Config, color: bool) -> anyhow::Result<ExitCode> {
    let result = longest_common_substring_str(&args.a, &args.b);
    let format = args.output.unwrap_or_else(|| config.output_format());
    print!("{}", report::formatter(format, color).lcs(&args.a, &args.b, &result)?);

    Ok(if result.length > 0 { ExitCode::Success } else { ExitCode::NoMatch })
}

/// Run the `strmatch distance` command.
pub fn run_distance(args: &PairArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let distance = edit_distance_str(&args.a, &args.b);
    let format = args.output.unwrap_or_else(|| config.output_format());
    print!("{}", report::formatter(format, false).distance(&args.a, &args.b, distance)?);
    Ok(ExitCode::Success)
}
