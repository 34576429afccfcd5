//! Growable arena of automaton states.
//!
//! States are addressed by [`StateId`] rather than by reference, so the
//! backing storage may reallocate while every issued id stays valid.

use std::ops::{Index, IndexMut};

use super::char_trait::PatternChar;
use super::state::{State, StateId};

/// Arena holding every state of one automaton. Slot 0 is the root.
#[derive(Clone, Debug)]
pub(crate) struct StateArena<C: PatternChar> {
    states: Vec<State<C>>,
}

impl<C: PatternChar> StateArena<C> {
    /// Creates an arena containing only the root.
    pub(crate) fn new() -> Self {
        StateArena {
            states: vec![State::new(0)],
        }
    }

    /// Appends a state and returns its id.
    pub(crate) fn alloc(&mut self, state: State<C>) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(state);
        id
    }

    /// Returns the number of states, root included.
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn root(&self) -> &State<C> {
        &self.states[0]
    }
}

impl<C: PatternChar> Index<StateId> for StateArena<C> {
    type Output = State<C>;

    #[inline]
    fn index(&self, id: StateId) -> &State<C> {
        &self.states[id.index()]
    }
}

impl<C: PatternChar> IndexMut<StateId> for StateArena<C> {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut State<C> {
        &mut self.states[id.index()]
    }
}
