// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick multi-pattern automaton.
//!
//! Construction happens in two passes over an arena of nodes:
//! 1. Insert every pattern into a trie (shared prefixes share nodes)
//! 2. Breadth-first, compute each node's failure link and output link
//!
//! Links are arena indices ([`StateId`]), never owning pointers, so the
//! back-edges of the failure graph create no ownership cycle.
//!
//! A built automaton is immutable and can be scanned from many threads at
//! once. There is no incremental insertion; if it is ever added it must not
//! run concurrently with scans of the same automaton.

mod builder;

use std::collections::HashMap;
use std::ops::ControlFlow;

use serde::Serialize;

use crate::error::MatchError;
use crate::symbol::Symbol;

/// Index of a pattern in the list passed to [`AhoCorasick::build`].
pub type PatternId = usize;

/// Index of a node in the automaton's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub const ROOT: StateId = StateId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// One occurrence of one pattern: `text[start..end] == patterns[pattern]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatchRecord {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
struct Node<S> {
    transitions: HashMap<S, StateId>,
    /// Longest proper suffix of this node's path that is also a trie path.
    failure: StateId,
    /// Nearest terminal node on the failure chain, excluding this one.
    output: Option<StateId>,
    /// Patterns ending exactly here, ascending.
    patterns: Vec<PatternId>,
    depth: usize,
}

impl<S> Node<S> {
    fn new(depth: usize) -> Self {
        Self {
            transitions: HashMap::new(),
            failure: StateId::ROOT,
            output: None,
            patterns: Vec::new(),
            depth,
        }
    }

    fn is_terminal(&self) -> bool {
        !self.patterns.is_empty()
    }
}

/// Aho-Corasick automaton over a fixed pattern set.
///
/// Duplicate patterns share one trie path, but each entry in the input list
/// keeps its own [`PatternId`] and is reported separately for every
/// occurrence.
#[derive(Debug, Clone)]
pub struct AhoCorasick<S> {
    nodes: Vec<Node<S>>,
    patterns: Vec<Vec<S>>,
}

impl<S: Symbol> AhoCorasick<S> {
    /// Build the automaton. Pattern ids are list positions.
    ///
    /// An empty list gives a root-only automaton that never matches. Any
    /// empty pattern is rejected with [`MatchError::InvalidArgument`].
    pub fn build<I, P>(patterns: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
    {
        let patterns: Vec<Vec<S>> = patterns.into_iter().map(|p| p.as_ref().to_vec()).collect();
        if let Some(id) = patterns.iter().position(|p| p.is_empty()) {
            return Err(MatchError::InvalidArgument(format!("pattern {} is empty", id)));
        }

        let nodes = builder::build_nodes(&patterns);
        tracing::debug!(
            "built automaton: {} patterns, {} states",
            patterns.len(),
            nodes.len()
        );
        Ok(Self { nodes, patterns })
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern(&self, id: PatternId) -> Option<&[S]> {
        self.patterns.get(id).map(Vec::as_slice)
    }

    /// Number of trie nodes, root included.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Trie child of `state` on `symbol`, without failure fallback.
    pub fn transition(&self, state: StateId, symbol: S) -> Option<StateId> {
        self.nodes
            .get(state.0)
            .and_then(|n| n.transitions.get(&symbol).copied())
    }

    pub fn failure(&self, state: StateId) -> Option<StateId> {
        self.nodes.get(state.0).map(|n| n.failure)
    }

    pub fn depth(&self, state: StateId) -> Option<usize> {
        self.nodes.get(state.0).map(|n| n.depth)
    }

    /// Follow the trie from root along `path`.
    pub fn state_for(&self, path: &[S]) -> Option<StateId> {
        path.iter()
            .try_fold(StateId::ROOT, |state, &symbol| self.transition(state, symbol))
    }

    /// Every match, ordered by end offset; at one end offset the longest
    /// pattern comes first, then ascending pattern id.
    pub fn scan(&self, text: &[S]) -> Vec<MatchRecord> {
        let mut matches = Vec::new();
        self.scan_with(text, |m| {
            matches.push(m);
            ControlFlow::Continue(())
        });
        matches
    }

    /// The match with the smallest end offset, if any.
    pub fn find_first(&self, text: &[S]) -> Option<MatchRecord> {
        let mut first = None;
        self.scan_with(text, |m| {
            first = Some(m);
            ControlFlow::Break(())
        });
        first
    }

    pub fn is_match(&self, text: &[S]) -> bool {
        self.find_first(text).is_some()
    }

    /// Stream matches to `visit` in [`scan`](Self::scan) order until it breaks.
    pub fn scan_with<F>(&self, text: &[S], mut visit: F)
    where
        F: FnMut(MatchRecord) -> ControlFlow<()>,
    {
        if self.patterns.is_empty() {
            return;
        }

        let mut state = StateId::ROOT;
        for (pos, &symbol) in text.iter().enumerate() {
            state = self.next_state(state, symbol);
            let end = pos + 1;

            let node = &self.nodes[state.0];
            let mut hit = if node.is_terminal() { Some(state) } else { node.output };
            while let Some(terminal) = hit {
                let node = &self.nodes[terminal.0];
                for &pattern in &node.patterns {
                    let record = MatchRecord {
                        pattern,
                        start: end - node.depth,
                        end,
                    };
                    if visit(record).is_break() {
                        return;
                    }
                }
                hit = node.output;
            }
        }
    }

    fn next_state(&self, state: StateId, symbol: S) -> StateId {
        builder::goto_or_fail(&self.nodes, state, symbol)
    }
}

impl AhoCorasick<u8> {
    /// Build over the UTF-8 bytes of each pattern.
    pub fn build_str<I, P>(patterns: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self::build(
            patterns
                .into_iter()
                .map(|p| p.as_ref().as_bytes().to_vec())
                .collect::<Vec<_>>(),
        )
    }

    /// Scan the UTF-8 bytes of `text`; offsets are byte offsets.
    pub fn scan_str(&self, text: &str) -> Vec<MatchRecord> {
        self.scan(text.as_bytes())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
