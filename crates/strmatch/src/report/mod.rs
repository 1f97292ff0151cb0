// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result formatting for the `strmatch` binary.
//!
//! Renders search, scan, lcs and distance results in text or JSON format.

mod json;
mod text;

use crate::automaton::MatchRecord;
use crate::cli::OutputFormat;
use crate::lcs::LcsResult;
use crate::pattern::Algorithm;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Offsets found in one input.
#[derive(Debug, Clone)]
pub struct InputOffsets {
    pub label: String,
    pub offsets: Vec<usize>,
}

/// Automaton matches found in one input.
#[derive(Debug, Clone)]
pub struct InputMatches {
    pub label: String,
    pub matches: Vec<MatchRecord>,
}

/// Result of `strmatch search`.
pub struct SearchReport<'a> {
    pub pattern: &'a str,
    /// Algorithms that produced `inputs`; more than one means they all agreed.
    pub algorithms: &'a [Algorithm],
    pub inputs: Vec<InputOffsets>,
}

impl SearchReport<'_> {
    pub fn total(&self) -> usize {
        self.inputs.iter().map(|i| i.offsets.len()).sum()
    }
}

/// Result of `strmatch scan`.
pub struct ScanReport<'a> {
    pub patterns: &'a [String],
    pub inputs: Vec<InputMatches>,
}

impl ScanReport<'_> {
    pub fn total(&self) -> usize {
        self.inputs.iter().map(|i| i.matches.len()).sum()
    }

    /// Pattern text for a match record.
    pub fn pattern_text(&self, record: &MatchRecord) -> &str {
        self.patterns
            .get(record.pattern)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Trait for formatting command results.
pub trait ReportFormatter {
    fn search(&self, report: &SearchReport<'_>) -> anyhow::Result<String>;

    fn scan(&self, report: &ScanReport<'_>) -> anyhow::Result<String>;

    fn lcs(&self, a: &str, b: &str, result: &LcsResult<char>) -> anyhow::Result<String>;

    fn distance(&self, a: &str, b: &str, distance: usize) -> anyhow::Result<String>;
}

/// Formatter for an output format. `color` only affects text output.
pub fn formatter(format: OutputFormat, color: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
