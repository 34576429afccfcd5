use super::char_trait::PatternChar;
use super::edges::Edges;
use super::pattern::PatternId;

/// Stable index of a state inside its [`StateArena`](super::state_arena::StateArena).
///
/// Ids are never reused or relocated, so fallback links can store them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct StateId(u32);

impl StateId {
    /// The root state, present in every automaton.
    pub(crate) const ROOT: StateId = StateId(0);

    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u32`.
    pub(crate) fn new(index: usize) -> Self {
        StateId(u32::try_from(index).expect("state id overflow"))
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn is_root(self) -> bool {
        self == StateId::ROOT
    }
}

/// A state of the automaton, representing one prefix of the registered patterns.
#[derive(Clone, Debug)]
pub(crate) struct State<C: PatternChar> {
    pub(crate) edges: Edges<C>,
    /// Where to retry on a missing edge. Only meaningful while compiled.
    pub(crate) fallback: StateId,
    /// Length of the prefix this state stands for.
    pub(crate) depth: u32,
    /// The pattern ending exactly here.
    pub(crate) pattern: Option<PatternId>,
    /// Nearest state on the fallback chain (this one included) where a
    /// pattern ends. Only meaningful while compiled.
    pub(crate) output: Option<StateId>,
}

impl<C: PatternChar> State<C> {
    pub(crate) fn new(depth: u32) -> Self {
        State {
            edges: Edges::None,
            fallback: StateId::ROOT,
            depth,
            pattern: None,
            output: None,
        }
    }

    /// Returns the state that `letter`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub(crate) fn get(&self, letter: C) -> Option<StateId> {
        self.edges.get(letter)
    }

    /// True if some pattern ends here or anywhere along the fallback chain.
    #[inline]
    pub(crate) fn has_output(&self) -> bool {
        self.output.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn root_id() {
        assert!(StateId::ROOT.is_root());
        assert_eq!(StateId::ROOT.index(), 0);
        assert!(!StateId::new(3).is_root());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "state id overflow")]
    fn state_id_overflow_panics() {
        StateId::new(u32::MAX as usize + 1);
    }

    #[test]
    fn fresh_state_has_no_output() {
        let s = State::<char>::new(2);
        assert_eq!(s.depth, 2);
        assert_eq!(s.fallback, StateId::ROOT);
        assert!(!s.has_output());
        assert_eq!(s.get('x'), None);
    }
}
