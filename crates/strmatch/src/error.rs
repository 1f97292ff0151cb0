// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

/// Error returned by the matching core.
///
/// Never logged by the library; the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl MatchError {
    pub(crate) fn empty_pattern() -> Self {
        MatchError::InvalidArgument("pattern must not be empty".to_string())
    }
}

/// Exit codes for the `strmatch` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded and found at least one match (or had nothing to match).
    Success = 0,
    /// Command ran but found no matches.
    NoMatch = 1,
    /// Bad configuration or arguments.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
