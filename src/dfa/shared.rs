//! A [`Dfa`] that can be cloned into several threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::builder::{BatchReport, Inserted};
use super::handle::{Dfa, Status};
use super::options::DfaOptions;
use super::pattern::IntoPattern;
use super::scanner::Match;
use crate::error::PatternError;

/// Reference-counted, internally synchronised [`Dfa<char>`].
///
/// Registering patterns takes the write lock. Scans of a compiled automaton
/// only take the read lock, so they run concurrently; the first scan after a
/// change compiles under the write lock.
///
/// ```
/// use sensdfa::SharedDfa;
///
/// let dfa = SharedDfa::new();
/// dfa.add_word("敏感").unwrap();
///
/// let reader = dfa.clone();
/// let hit = std::thread::spawn(move || reader.is_sensitive("这是一个敏感的测试"))
///     .join()
///     .unwrap();
/// assert!(hit);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedDfa {
    inner: Arc<RwLock<Dfa<char>>>,
}

impl SharedDfa {
    /// Creates an empty shared automaton with default options.
    pub fn new() -> Self {
        Self::from_dfa(Dfa::new())
    }

    /// Creates an empty shared automaton.
    pub fn with_options(options: DfaOptions) -> Self {
        Self::from_dfa(Dfa::with_options(options))
    }

    /// Wraps an existing automaton.
    pub fn from_dfa(dfa: Dfa<char>) -> Self {
        SharedDfa {
            inner: Arc::new(RwLock::new(dfa)),
        }
    }

    // A panicking insert leaves the automaton structurally sound, at worst
    // dirty, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Dfa<char>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Dfa<char>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Dfa::add_word`].
    ///
    /// # Panics
    ///
    /// Panics if the automaton would exceed `u32::MAX` states or patterns.
    pub fn add_word(&self, word: impl IntoPattern<char>) -> Result<Inserted, PatternError> {
        self.write().add_word(word)
    }

    /// See [`Dfa::add_words`].
    ///
    /// # Panics
    ///
    /// Panics if the automaton would exceed `u32::MAX` states or patterns,
    /// or if `words` panics. Other clones stay usable either way.
    pub fn add_words<P>(&self, words: impl IntoIterator<Item = P>) -> BatchReport
    where
        P: IntoPattern<char>,
    {
        self.write().add_words(words)
    }

    /// See [`Dfa::is_sensitive`].
    pub fn is_sensitive(&self, text: &str) -> bool {
        {
            let dfa = self.read();
            if let Some(m) = dfa.matcher() {
                return m.is_match_with(text.chars(), dfa.options().mode);
            }
        }
        self.write().is_sensitive(text)
    }

    /// See [`Dfa::find_all`].
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        {
            let dfa = self.read();
            if let Some(m) = dfa.matcher() {
                return m.find_iter(text.chars()).collect();
            }
        }
        self.write().find_all(text.chars())
    }

    /// See [`Dfa::compile`].
    pub fn compile(&self) {
        if self.status() == Status::Dirty {
            self.write().compile();
        }
    }

    /// See [`Dfa::status`].
    pub fn status(&self) -> Status {
        self.read().status()
    }

    /// See [`Dfa::pattern_count`].
    pub fn pattern_count(&self) -> usize {
        self.read().pattern_count()
    }
}

impl From<Dfa<char>> for SharedDfa {
    fn from(dfa: Dfa<char>) -> Self {
        Self::from_dfa(dfa)
    }
}
