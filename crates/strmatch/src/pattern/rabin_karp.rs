// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rabin-Karp with a polynomial rolling hash.
//!
//! Hash equality is only a candidate; every candidate window is compared
//! symbol by symbol before it is reported.

use std::ops::ControlFlow;

use super::Searcher;
use crate::config::defaults;
use crate::error::MatchError;
use crate::symbol::Symbol;

/// Base and modulus of the polynomial hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarpParams {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarpParams {
    fn default() -> Self {
        Self {
            base: defaults::rabin_karp::BASE,
            modulus: defaults::rabin_karp::MODULUS,
        }
    }
}

impl RabinKarpParams {
    /// Requires `2 <= base < modulus <= u32::MAX` so intermediate products fit in `u64`.
    pub fn new(base: u64, modulus: u64) -> Result<Self, MatchError> {
        if modulus < 2 || modulus > u64::from(u32::MAX) {
            return Err(MatchError::InvalidArgument(format!(
                "rabin-karp modulus must be in 2..={}, got {}",
                u32::MAX,
                modulus
            )));
        }
        if base < 2 || base >= modulus {
            return Err(MatchError::InvalidArgument(format!(
                "rabin-karp base must be in 2..{}, got {}",
                modulus, base
            )));
        }
        Ok(Self { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    fn reduce<S: Symbol>(&self, symbol: S) -> u64 {
        u64::from(symbol.code()) % self.modulus
    }

    /// Hash of a whole sequence.
    pub fn hash<S: Symbol>(&self, symbols: &[S]) -> u64 {
        symbols
            .iter()
            .fold(0, |h, &s| (h * self.base + self.reduce(s)) % self.modulus)
    }
}

/// Hash of a fixed-width window, updated in O(1) per shift.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: RabinKarpParams,
    /// `base^(width-1) mod modulus`, the weight of the outgoing symbol.
    multiplier_pow: u64,
    window_hash: u64,
}

impl RollingHash {
    /// Start with `window` as the current window.
    pub fn new<S: Symbol>(params: RabinKarpParams, window: &[S]) -> Self {
        let mut multiplier_pow = 1;
        for _ in 1..window.len() {
            multiplier_pow = multiplier_pow * params.base % params.modulus;
        }
        Self {
            params,
            multiplier_pow,
            window_hash: params.hash(window),
        }
    }

    pub fn hash(&self) -> u64 {
        self.window_hash
    }

    /// Drop `outgoing` from the front of the window and append `incoming`.
    #[inline]
    pub fn roll<S: Symbol>(&mut self, outgoing: S, incoming: S) {
        let p = &self.params;
        let weighted = p.reduce(outgoing) * self.multiplier_pow % p.modulus;
        // add modulus before subtracting so the result stays non-negative
        let without = (self.window_hash + p.modulus - weighted) % p.modulus;
        self.window_hash = (without * p.base + p.reduce(incoming)) % p.modulus;
    }
}

#[derive(Debug, Clone)]
pub struct RabinKarp<S> {
    pattern: Vec<S>,
    params: RabinKarpParams,
    pattern_hash: u64,
}

impl<S: Symbol> RabinKarp<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self::with_params(pattern, RabinKarpParams::default())
    }

    pub fn with_params(pattern: &[S], params: RabinKarpParams) -> Self {
        Self {
            pattern: pattern.to_vec(),
            params,
            pattern_hash: params.hash(pattern),
        }
    }

    pub fn params(&self) -> RabinKarpParams {
        self.params
    }
}

impl<S: Symbol> Searcher<S> for RabinKarp<S> {
    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let (n, m) = (text.len(), self.pattern.len());
        if m == 0 || m > n {
            return;
        }

        let mut window = RollingHash::new(self.params, &text[..m]);
        for s in 0..=n - m {
            if s > 0 {
                window.roll(text[s - 1], text[s + m - 1]);
            }
            if window.hash() == self.pattern_hash
                && text[s..s + m] == *self.pattern
                && visit(s).is_break()
            {
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "rabin_karp_tests.rs"]
mod tests;
