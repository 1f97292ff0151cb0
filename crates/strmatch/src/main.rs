// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch` command-line entry point.

mod cmd_pair;
mod cmd_scan;
mod cmd_search;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use strmatch::cli::{Cli, Command};
use strmatch::color;
use strmatch::config::{self, Config, defaults};
use strmatch::discovery;
use strmatch::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("strmatch: {e:#}");
            ExitCode::ConfigError.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;
    let color = color::should_color(color::resolve_color(cli.color, cli.no_color));

    match &cli.command {
        Command::Search(args) => cmd_search::run(args, &config, color),
        Command::Scan(args) => cmd_scan::run(args, &config, color),
        Command::Lcs(args) => cmd_pair::run_lcs(args, &config, color),
        Command::Distance(args) => cmd_pair::run_distance(args, &config),
    }
}

/// Explicit `--config` wins; otherwise discover strmatch.toml from the cwd.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}

/// Log to stderr. `--verbose` forces debug; otherwise `STRMATCH_LOG`, else warn.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(defaults::env::LOG).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
