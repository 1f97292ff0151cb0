// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

/// Single-pattern search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Naive,
    #[default]
    Kmp,
    BoyerMoore,
    RabinKarp,
    ZAlgorithm,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
        Algorithm::ZAlgorithm,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::RabinKarp => "rabin-karp",
            Algorithm::ZAlgorithm => "z",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    /// Parse an algorithm name. Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "naive" | "brute-force" => Ok(Algorithm::Naive),
            "kmp" | "knuth-morris-pratt" => Ok(Algorithm::Kmp),
            "boyer-moore" | "bm" | "boyermoore" => Ok(Algorithm::BoyerMoore),
            "rabin-karp" | "rk" | "rabinkarp" => Ok(Algorithm::RabinKarp),
            "z" | "z-algorithm" | "zalgorithm" => Ok(Algorithm::ZAlgorithm),
            _ => Err(MatchError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "algorithm_tests.rs"]
mod tests;
