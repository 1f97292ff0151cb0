// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-supplied search history.
//!
//! The matchers keep no state between calls. Callers that want a log of
//! searches pass an observer to [`match_single_observed`](crate::match_single_observed),
//! which reports each completed call exactly once.

use crate::pattern::Algorithm;

/// Summary of one completed single-pattern search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEvent {
    pub algorithm: Algorithm,
    pub text_len: usize,
    pub pattern_len: usize,
    /// Number of offsets returned.
    pub matches: usize,
}

/// Receives one event per completed search.
pub trait SearchObserver {
    fn on_search(&mut self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent),
{
    fn on_search(&mut self, event: &SearchEvent) {
        self(event)
    }
}

/// In-memory log of search events, oldest first.
#[derive(Debug, Default, Clone)]
pub struct SearchHistory {
    events: Vec<SearchEvent>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total matches across all recorded searches.
    pub fn total_matches(&self) -> usize {
        self.events.iter().map(|e| e.matches).sum()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for SearchHistory {
    fn on_search(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
