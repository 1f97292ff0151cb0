// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::fmt::Display;
use std::io::{self, Write};

use termcolor::{Buffer, ColorSpec, WriteColor};

use super::{ReportFormatter, ScanReport, SearchReport};
use crate::color::scheme;
use crate::lcs::LcsResult;

/// Plain text formatter: one `input:offset` line per match, then a summary.
///
/// With color enabled the same text is wrapped in ANSI escapes.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Formatter that never emits escapes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn buffer(&self) -> Buffer {
        if self.color { Buffer::ansi() } else { Buffer::no_color() }
    }
}

fn count_matches(n: usize) -> String {
    if n == 1 { "1 match".to_string() } else { format!("{n} matches") }
}

fn paint(buf: &mut Buffer, spec: &ColorSpec, text: impl Display) -> io::Result<()> {
    buf.set_color(spec)?;
    write!(buf, "{text}")?;
    buf.reset()
}

fn finish(buf: Buffer) -> anyhow::Result<String> {
    Ok(String::from_utf8(buf.into_inner())?)
}

impl ReportFormatter for TextFormatter {
    fn search(&self, report: &SearchReport<'_>) -> anyhow::Result<String> {
        let mut buf = self.buffer();
        for input in &report.inputs {
            for offset in &input.offsets {
                paint(&mut buf, &scheme::label(), &input.label)?;
                write!(buf, ":")?;
                paint(&mut buf, &scheme::offset(), offset)?;
                writeln!(buf)?;
            }
        }

        let names: Vec<&str> = report.algorithms.iter().map(|a| a.name()).collect();
        let suffix = if names.len() > 1 { " agree" } else { "" };
        paint(
            &mut buf,
            &scheme::summary(),
            format_args!("{} ({}{})", count_matches(report.total()), names.join(", "), suffix),
        )?;
        writeln!(buf)?;
        finish(buf)
    }

    fn scan(&self, report: &ScanReport<'_>) -> anyhow::Result<String> {
        let mut buf = self.buffer();
        for input in &report.inputs {
            for record in &input.matches {
                paint(&mut buf, &scheme::label(), &input.label)?;
                write!(buf, ":")?;
                let range = format!("{}-{}", record.start, record.end);
                paint(&mut buf, &scheme::offset(), range)?;
                write!(buf, ":")?;
                paint(&mut buf, &scheme::matched(), report.pattern_text(record))?;
                writeln!(buf)?;
            }
        }
        paint(
            &mut buf,
            &scheme::summary(),
            format_args!(
                "{} for {} patterns",
                count_matches(report.total()),
                report.patterns.len()
            ),
        )?;
        writeln!(buf)?;
        finish(buf)
    }

    fn lcs(&self, _a: &str, _b: &str, result: &LcsResult<char>) -> anyhow::Result<String> {
        let mut buf = self.buffer();
        paint(&mut buf, &scheme::matched(), result.as_string())?;
        writeln!(buf)?;
        writeln!(buf, "length: {}", result.length)?;
        let pairs: Vec<String> = result
            .occurrences
            .iter()
            .map(|(a, b)| format!("({a}, {b})"))
            .collect();
        writeln!(buf, "occurrences: {}", pairs.join(", "))?;
        finish(buf)
    }

    fn distance(&self, _a: &str, _b: &str, distance: usize) -> anyhow::Result<String> {
        Ok(format!("{distance}\n"))
    }
}
