//! Failure-link compiler.
//!
//! Turns the prefix tree into an Aho-Corasick automaton: every state gets the
//! state to retry from on a missing edge (its longest proper suffix that is
//! also a prefix of some pattern), and the nearest state on that chain where a
//! pattern ends.

use std::collections::VecDeque;
use std::time::Instant;

use smallvec::SmallVec;
use tracing::debug;

use super::char_trait::PatternChar;
use super::state::StateId;
use super::state_arena::StateArena;

#[cfg(test)]
thread_local! {
    /// Fallback links followed by [`transition`] on this thread.
    pub(crate) static FALLBACK_STEPS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Follows `ch` from `from`, falling back until an edge exists.
///
/// The root loops onto itself on every missing edge, so this always lands
/// somewhere. Only valid once fallback links are compiled.
#[inline]
pub(crate) fn transition<C: PatternChar>(states: &StateArena<C>, from: StateId, ch: C) -> StateId {
    let mut current = from;
    loop {
        if let Some(next) = states[current].get(ch) {
            return next;
        }
        if current.is_root() {
            return StateId::ROOT;
        }
        #[cfg(test)]
        FALLBACK_STEPS.with(|n| n.set(n.get() + 1));
        current = states[current].fallback;
    }
}

/// Recomputes every fallback link and inherited output, breadth first.
///
/// States are visited in order of increasing depth, so a state's fallback
/// (always shallower) is final before the state itself is linked.
pub(crate) fn compile<C: PatternChar>(states: &mut StateArena<C>) {
    let started = Instant::now();

    let root = &mut states[StateId::ROOT];
    root.fallback = StateId::ROOT;
    root.output = root.pattern.map(|_| StateId::ROOT);

    let mut queue: VecDeque<StateId> = VecDeque::with_capacity(states.len());
    let first_level: Vec<StateId> = states.root().edges.iter().map(|(_, s)| s).collect();
    for child in first_level {
        link(states, child, StateId::ROOT);
        queue.push_back(child);
    }

    while let Some(parent) = queue.pop_front() {
        let parent_fallback = states[parent].fallback;
        let edges: SmallVec<[(C, StateId); 4]> = states[parent].edges.iter().collect();
        for (ch, child) in edges {
            let fallback = transition(states, parent_fallback, ch);
            link(states, child, fallback);
            queue.push_back(child);
        }
    }

    debug!(
        states = states.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "compiled failure links"
    );
}

fn link<C: PatternChar>(states: &mut StateArena<C>, state: StateId, fallback: StateId) {
    let inherited = states[fallback].output;
    let s = &mut states[state];
    s.fallback = fallback;
    s.output = if s.pattern.is_some() { Some(state) } else { inherited };
}
