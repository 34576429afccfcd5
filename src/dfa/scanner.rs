use super::builder::Trie;
use super::char_trait::PatternChar;
use super::compiler::transition;
use super::options::MatchMode;
use super::pattern::{PatternId, PatternStore};
use super::state::StateId;
use super::state_arena::StateArena;

/// An occurrence of a registered pattern in scanned text.
///
/// Offsets count labels (Unicode scalar values for `char` text), not bytes;
/// `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// The pattern that occurred.
    pub pattern: PatternId,
    /// Offset of the first label of the occurrence.
    pub start: usize,
    /// Offset one past the last label of the occurrence.
    pub end: usize,
}

impl Match {
    /// Number of labels covered by the occurrence.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: patterns are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Read-only view of a compiled automaton.
///
/// Obtained from [`Dfa::matcher`](super::handle::Dfa::matcher), which only
/// hands one out while fallback links are valid. Copies are cheap and can be
/// shared between threads.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a, C: PatternChar> {
    states: &'a StateArena<C>,
    patterns: &'a PatternStore<C>,
}

impl<'a, C: PatternChar> Matcher<'a, C> {
    pub(crate) fn new(trie: &'a Trie<C>) -> Self {
        Matcher {
            states: &trie.states,
            patterns: &trie.patterns,
        }
    }

    /// Returns true if some registered pattern occurs in `text` as a
    /// contiguous run.
    ///
    /// Stops at the first occurrence. Runs in time linear in the length of
    /// `text` whatever the number of patterns.
    pub fn is_match(&self, text: impl IntoIterator<Item = C>) -> bool {
        let mut current = StateId::ROOT;
        for ch in text {
            current = transition(self.states, current, ch);
            if self.states[current].has_output() {
                return true;
            }
        }
        false
    }

    /// Returns the occurrence that ends first, preferring the longest pattern
    /// among those ending at the same offset.
    pub fn find_first(&self, text: impl IntoIterator<Item = C>) -> Option<Match> {
        self.find_iter(text).next()
    }

    /// Returns an iterator over every occurrence, overlapping ones included.
    ///
    /// Occurrences are ordered by end offset, then from longest to shortest.
    pub fn find_iter<I>(&self, text: I) -> FindIter<'a, C, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        FindIter {
            states: self.states,
            text: text.into_iter(),
            pos: 0,
            current: StateId::ROOT,
            pending: None,
        }
    }

    /// Returns true if the labels of some registered pattern appear in `text`
    /// in order, possibly with other labels between them.
    ///
    /// This is a looser test than [`is_match`](Self::is_match): every
    /// contiguous occurrence is also a subsequence. It reads `text` once but
    /// costs time proportional to its length times the number of patterns.
    pub fn is_subsequence_match(&self, text: impl IntoIterator<Item = C>) -> bool {
        // Greedy: the earliest possible position for each pattern label.
        let mut cursors = vec![0usize; self.patterns.len()];
        for ch in text {
            for ((_, pattern), cursor) in self.patterns.iter().zip(cursors.iter_mut()) {
                if pattern[*cursor] == ch {
                    *cursor += 1;
                    if *cursor == pattern.len() {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Dispatches to [`is_match`](Self::is_match) or
    /// [`is_subsequence_match`](Self::is_subsequence_match).
    pub fn is_match_with(&self, text: impl IntoIterator<Item = C>, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Contiguous => self.is_match(text),
            MatchMode::Subsequence => self.is_subsequence_match(text),
        }
    }

    /// Returns the labels of a registered pattern.
    pub fn pattern(&self, id: PatternId) -> Option<&'a [C]> {
        self.patterns.get(id)
    }
}

/// Iterator over pattern occurrences, created by [`Matcher::find_iter`].
#[derive(Clone, Debug)]
pub struct FindIter<'a, C: PatternChar, I> {
    states: &'a StateArena<C>,
    text: I,
    pos: usize,
    current: StateId,
    /// Next output state still to report at `pos`.
    pending: Option<StateId>,
}

impl<C: PatternChar, I: Iterator<Item = C>> Iterator for FindIter<'_, C, I> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(out) = self.pending.take() {
                let state = &self.states[out];
                if !out.is_root() {
                    self.pending = self.states[state.fallback].output;
                }
                if let Some(pattern) = state.pattern {
                    let len = state.depth as usize;
                    return Some(Match {
                        pattern,
                        start: self.pos - len,
                        end: self.pos,
                    });
                }
                continue;
            }
            let ch = self.text.next()?;
            self.current = transition(self.states, self.current, ch);
            self.pos += 1;
            self.pending = self.states[self.current].output;
        }
    }
}
