// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie construction and failure-link propagation.

use std::collections::VecDeque;

use super::{Node, PatternId, StateId};
use crate::symbol::Symbol;

/// Build the linked node arena for `patterns`. Patterns must be non-empty.
pub(super) fn build_nodes<S: Symbol>(patterns: &[Vec<S>]) -> Vec<Node<S>> {
    let mut nodes = vec![Node::new(0)];
    for (id, pattern) in patterns.iter().enumerate() {
        insert(&mut nodes, pattern, id);
    }
    link(&mut nodes);
    nodes
}

fn insert<S: Symbol>(nodes: &mut Vec<Node<S>>, pattern: &[S], id: PatternId) {
    let mut state = StateId::ROOT;
    for (depth, &symbol) in pattern.iter().enumerate() {
        state = match nodes[state.0].transitions.get(&symbol) {
            Some(&next) => next,
            None => {
                let next = StateId(nodes.len());
                nodes.push(Node::new(depth + 1));
                nodes[state.0].transitions.insert(symbol, next);
                next
            }
        };
    }
    nodes[state.0].patterns.push(id);
}

/// Breadth-first failure and output links. A node is only linked after
/// every shallower node, which the failure lookup relies on.
fn link<S: Symbol>(nodes: &mut [Node<S>]) {
    let mut queue: VecDeque<StateId> = nodes[0].transitions.values().copied().collect();
    for &child in &queue {
        nodes[child.0].failure = StateId::ROOT;
    }

    while let Some(parent) = queue.pop_front() {
        let edges: Vec<(S, StateId)> = nodes[parent.0]
            .transitions
            .iter()
            .map(|(&symbol, &child)| (symbol, child))
            .collect();

        for (symbol, child) in edges {
            let failure = goto_or_fail(nodes, nodes[parent.0].failure, symbol);
            let target = &nodes[failure.0];
            let output = if target.is_terminal() { Some(failure) } else { target.output };

            let node = &mut nodes[child.0];
            node.failure = failure;
            node.output = output;
            queue.push_back(child);
        }
    }
}

/// Walk the failure chain from `state` to the first node with a `symbol`
/// transition and return that child, or root.
pub(super) fn goto_or_fail<S: Symbol>(
    nodes: &[Node<S>],
    mut state: StateId,
    symbol: S,
) -> StateId {
    loop {
        if let Some(&next) = nodes[state.0].transitions.get(&symbol) {
            return next;
        }
        if state == StateId::ROOT {
            return StateId::ROOT;
        }
        state = nodes[state.0].failure;
    }
}
