// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Naive scan: compare the pattern at every offset.
//!
//! O(n·m) worst case, no auxiliary state. The other algorithms are tested
//! against this one.

use std::ops::ControlFlow;

use super::Searcher;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Naive<S> {
    pattern: Vec<S>,
}

impl<S: Symbol> Naive<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self {
            pattern: pattern.to_vec(),
        }
    }
}

impl<S: Symbol> Searcher<S> for Naive<S> {
    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn scan(&self, text: &[S], visit: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return;
        }
        for (offset, window) in text.windows(m).enumerate() {
            if window == self.pattern.as_slice() && visit(offset).is_break() {
                return;
            }
        }
    }
}
