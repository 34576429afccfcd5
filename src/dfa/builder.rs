use tracing::{debug, trace};

use super::char_trait::PatternChar;
use super::pattern::{validate, IntoPattern, PatternId, PatternStore};
use super::state::{State, StateId};
use super::state_arena::StateArena;
use crate::error::PatternError;

/// Outcome of registering a valid pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inserted {
    /// The pattern was not registered before and received a fresh id.
    New(PatternId),
    /// The pattern was already registered; nothing changed.
    Existing(PatternId),
}

impl Inserted {
    /// The id of the pattern, fresh or not.
    pub fn id(self) -> PatternId {
        match self {
            Inserted::New(id) | Inserted::Existing(id) => id,
        }
    }

    /// True if the insertion changed the automaton.
    pub fn is_new(self) -> bool {
        matches!(self, Inserted::New(_))
    }
}

/// Summary of a batch insertion.
///
/// Invalid entries are recorded with their position in the batch; they never
/// stop the remaining entries from being inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Entries registered for the first time.
    pub inserted: usize,
    /// Entries that were already registered.
    pub existing: usize,
    /// Position and reason of every rejected entry.
    pub rejected: Vec<(usize, PatternError)>,
}

impl BatchReport {
    /// True if every entry of the batch was a valid pattern.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    fn record(&mut self, index: usize, result: Result<Inserted, PatternError>) {
        match result {
            Ok(Inserted::New(_)) => self.inserted += 1,
            Ok(Inserted::Existing(_)) => self.existing += 1,
            Err(e) => self.rejected.push((index, e)),
        }
    }
}

/// The prefix tree shared by all patterns, plus the pattern store.
///
/// Insertion only touches edges and direct outputs; fallback links are left
/// to the [compiler](super::compiler).
#[derive(Clone, Debug)]
pub(crate) struct Trie<C: PatternChar> {
    pub(crate) states: StateArena<C>,
    pub(crate) patterns: PatternStore<C>,
}

impl<C: PatternChar> Trie<C> {
    /// Creates a trie holding only the root.
    pub(crate) fn new() -> Self {
        Trie {
            states: StateArena::new(),
            patterns: PatternStore::new(),
        }
    }

    /// Registers a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern is empty or blank; the trie is
    /// left untouched in that case.
    pub(crate) fn insert(&mut self, pattern: impl IntoPattern<C>) -> Result<Inserted, PatternError> {
        let pattern = pattern.collect_pattern();
        self.insert_slice(&pattern)
    }

    pub(crate) fn insert_slice(&mut self, pattern: &[C]) -> Result<Inserted, PatternError> {
        if let Err(e) = validate(pattern) {
            debug!(error = %e, "rejected pattern");
            return Err(e);
        }

        let mut current = StateId::ROOT;
        for &ch in pattern {
            current = self.child_or_insert(current, ch);
        }

        if let Some(id) = self.states[current].pattern {
            return Ok(Inserted::Existing(id));
        }
        let id = self.patterns.push(pattern);
        self.states[current].pattern = Some(id);
        trace!(%id, len = pattern.len(), "registered pattern");
        Ok(Inserted::New(id))
    }

    /// Registers every entry of `patterns`, skipping the invalid ones.
    pub(crate) fn insert_many<P>(&mut self, patterns: impl IntoIterator<Item = P>) -> BatchReport
    where
        P: IntoPattern<C>,
    {
        let mut report = BatchReport::default();
        for (index, pattern) in patterns.into_iter().enumerate() {
            report.record(index, self.insert(pattern));
        }
        if !report.is_complete() {
            debug!(
                rejected = report.rejected.len(),
                inserted = report.inserted,
                "batch contained invalid patterns"
            );
        }
        report
    }

    /// Follows the edge on `ch`, creating a new state if there is none.
    fn child_or_insert(&mut self, from: StateId, ch: C) -> StateId {
        if let Some(next) = self.states[from].get(ch) {
            return next;
        }
        let depth = self.states[from].depth + 1;
        let next = self.states.alloc(State::new(depth));
        self.states[from].edges.insert(ch, next);
        next
    }

    /// Walks the trie along `pattern` without creating anything.
    pub(crate) fn find(&self, pattern: &[C]) -> Option<StateId> {
        pattern
            .iter()
            .try_fold(StateId::ROOT, |s, &ch| self.states[s].get(ch))
    }

    /// Returns the id of an already registered pattern.
    pub(crate) fn pattern_id(&self, pattern: &[C]) -> Option<PatternId> {
        self.find(pattern).and_then(|s| self.states[s].pattern)
    }
}
