// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;

use super::{ReportFormatter, ScanReport, SearchReport};
use crate::lcs::LcsResult;

/// JSON formatter. Every document ends with a newline.
pub struct JsonFormatter;

fn render(value: serde_json::Value) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

impl ReportFormatter for JsonFormatter {
    fn search(&self, report: &SearchReport<'_>) -> anyhow::Result<String> {
        let algorithms: Vec<&str> = report.algorithms.iter().map(|a| a.name()).collect();
        let inputs: Vec<_> = report
            .inputs
            .iter()
            .map(|i| json!({ "input": i.label, "offsets": i.offsets }))
            .collect();

        render(json!({
            "pattern": report.pattern,
            "algorithms": algorithms,
            "total": report.total(),
            "inputs": inputs,
        }))
    }

    fn scan(&self, report: &ScanReport<'_>) -> anyhow::Result<String> {
        let inputs: Vec<_> = report
            .inputs
            .iter()
            .map(|i| {
                let matches: Vec<_> = i
                    .matches
                    .iter()
                    .map(|m| {
                        json!({
                            "pattern": m.pattern,
                            "text": report.pattern_text(m),
                            "start": m.start,
                            "end": m.end,
                        })
                    })
                    .collect();
                json!({ "input": i.label, "matches": matches })
            })
            .collect();

        render(json!({
            "patterns": report.patterns,
            "total": report.total(),
            "inputs": inputs,
        }))
    }

    fn lcs(&self, a: &str, b: &str, result: &LcsResult<char>) -> anyhow::Result<String> {
        render(json!({
            "a": a,
            "b": b,
            "text": result.as_string(),
            "length": result.length,
            "occurrences": result.occurrences,
        }))
    }

    fn distance(&self, a: &str, b: &str, distance: usize) -> anyhow::Result<String> {
        render(json!({ "a": a, "b": b, "distance": distance }))
    }
}
