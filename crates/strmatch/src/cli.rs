// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Exact string matching: KMP, Boyer-Moore, Rabin-Karp, Z-algorithm and Aho-Corasick
#[derive(Parser)]
#[command(name = "strmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STRMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Force color output even when stdout is not a terminal
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find every occurrence of one pattern
    Search(SearchArgs),
    /// Find every occurrence of several patterns in one pass
    Scan(ScanArgs),
    /// Longest common substring of two strings
    Lcs(PairArgs),
    /// Edit distance between two strings
    Distance(PairArgs),
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Pattern to search for
    pub pattern: String,

    /// Files to search (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Algorithm: naive, kmp, boyer-moore, rabin-karp, z
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Run every algorithm and fail if any disagree
    #[arg(long, conflicts_with = "algorithm")]
    pub all_algorithms: bool,

    /// Output format (default from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Pattern to search for (repeatable)
    #[arg(short = 'p', long = "pattern", required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Files to scan (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format (default from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct PairArgs {
    pub a: String,
    pub b: String,

    /// Output format (default from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
