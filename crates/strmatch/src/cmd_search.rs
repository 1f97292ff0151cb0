// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch search` command implementation.
//!
//! Compiles one pattern per selected algorithm, then searches every input in
//! parallel with the shared compiled matchers.

use anyhow::bail;
use rayon::prelude::*;

use strmatch::cli::SearchArgs;
use strmatch::config::Config;
use strmatch::error::ExitCode;
use strmatch::file_reader::{self, Source};
use strmatch::pattern::{Algorithm, CompiledPattern};
use strmatch::report::{self, InputOffsets, SearchReport};

/// Run the `strmatch search` command.
pub fn run(args: &SearchArgs, config: &Config, color: bool) -> anyhow::Result<ExitCode> {
    let algorithms = if args.all_algorithms {
        Algorithm::ALL.to_vec()
    } else {
        match &args.algorithm {
            Some(name) => vec![name.parse::<Algorithm>()?],
            None => vec![config.algorithm()?],
        }
    };
    let params = config.rabin_karp_params()?;

    let compiled = algorithms
        .iter()
        .map(|&algorithm| {
            CompiledPattern::compile_with(args.pattern.as_bytes(), algorithm, params)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let sources = file_reader::load_sources(&args.paths)?;
    tracing::debug!("searching {} inputs with {:?}", sources.len(), algorithms);

    let inputs = sources
        .par_iter()
        .map(|source| search_source(source, &compiled))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = SearchReport {
        pattern: &args.pattern,
        algorithms: &algorithms,
        inputs,
    };
    let format = args.output.unwrap_or_else(|| config.output_format());
    print!("{}", report::formatter(format, color).search(&report)?);

    Ok(if report.total() > 0 { ExitCode::Success } else { ExitCode::NoMatch })
}

/// Search one input with every compiled matcher, requiring identical results.
fn search_source(
    source: &Source,
    compiled: &[CompiledPattern<u8>],
) -> anyhow::Result<InputOffsets> {
    let text = source.content.as_bytes();
    let Some((first, rest)) = compiled.split_first() else {
        bail!("no algorithm selected");
    };

    let offsets = first.find_all(text);
    for other in rest {
        let other_offsets = other.find_all(text);
        if other_offsets != offsets {
            bail!(
                "{} and {} disagree on {}: {:?} vs {:?}",
                first.algorithm(),
                other.algorithm(),
                source.label,
                offsets,
                other_offsets
            );
        }
    }

    Ok(InputOffsets {
        label: source.label.clone(),
        offsets,
    })
}
